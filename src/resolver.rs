//! Target resolution: which assistant(s) an invocation acts on.
//!
//! When `--ai` is absent the resolver probes the project directory and
//! consults the operator. Prompting goes through the [`Prompter`] trait so
//! the branching here can be exercised without a live terminal.

use std::path::Path;

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::detect::{detect_assistant_folders, is_skill_installed};
use crate::errors::{InstallError, Result};
use crate::models::Selection;

/// Capability to ask the operator to pick one selection from a menu.
pub trait Prompter {
    /// Present `choices` with the item at `default` preselected.
    /// `Ok(None)` means the operator cancelled.
    fn select(
        &mut self,
        message: &str,
        choices: &[Selection],
        default: usize,
    ) -> Result<Option<Selection>>;
}

/// Interactive prompter backed by the terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(
        &mut self,
        message: &str,
        choices: &[Selection],
        default: usize,
    ) -> Result<Option<Selection>> {
        let items: Vec<String> = choices.iter().map(Selection::to_string).collect();
        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(&items)
            .default(default)
            .interact_opt()?;
        Ok(picked.map(|i| choices[i]))
    }
}

/// Scripted prompter returning a canned response; used in tests and
/// non-interactive automation.
pub struct ScriptedPrompter {
    /// `None` simulates the operator cancelling the prompt.
    pub response: Option<Selection>,
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        _message: &str,
        _choices: &[Selection],
        _default: usize,
    ) -> Result<Option<Selection>> {
        Ok(self.response)
    }
}

/// Resolve the target for `init` when no `--ai` was given.
///
/// Offers every assistant plus "all". When exactly one configuration
/// folder is detected it becomes the preselected default, otherwise "all"
/// is.
pub fn resolve_init_target(project: &Path, prompter: &mut dyn Prompter) -> Result<Selection> {
    let detected = detect_assistant_folders(project);
    let default = if detected.len() == 1 {
        Selection::CHOICES
            .iter()
            .position(|c| *c == Selection::Only(detected[0]))
            .unwrap_or(Selection::CHOICES.len() - 1)
    } else {
        // "all" is last in the menu.
        Selection::CHOICES.len() - 1
    };

    prompter
        .select(
            "Which AI assistant do you want to install the skill for?",
            &Selection::CHOICES,
            default,
        )?
        .ok_or(InstallError::Cancelled("installation cancelled"))
}

/// Resolve the target for `update` when no `--ai` was given.
///
/// Only assistants that actually have the skill installed qualify: none
/// means `NotInstalled`, exactly one is selected silently, several are
/// offered alongside "all".
pub fn resolve_update_target(project: &Path, prompter: &mut dyn Prompter) -> Result<Selection> {
    let installed: Vec<_> = detect_assistant_folders(project)
        .into_iter()
        .filter(|a| is_skill_installed(project, *a))
        .collect();

    match installed.as_slice() {
        [] => Err(InstallError::NotInstalled {
            message: "no UI/UX Mobile skill installation found; run `uipro-mobile init` first"
                .to_string(),
        }),
        [only] => {
            println!("Found installation for {only}.");
            Ok(Selection::Only(*only))
        }
        several => {
            let mut choices: Vec<Selection> =
                several.iter().map(|a| Selection::Only(*a)).collect();
            choices.push(Selection::All);
            prompter
                .select("Which installation do you want to update?", &choices, 0)?
                .ok_or(InstallError::Cancelled("update cancelled"))
        }
    }
}
