use std::time::Duration;

use indicatif::ProgressBar;

use uipro_mobile::errors::{InstallError, Result};
use uipro_mobile::models::{Assistant, Selection};
use uipro_mobile::resolver::TerminalPrompter;

pub(crate) fn run(ai: Option<String>, force: bool) {
    if let Err(e) = run_inner(ai, force) {
        eprintln!("uipro-mobile init: {e}");
        std::process::exit(1);
    }
}

fn run_inner(ai: Option<String>, force: bool) -> Result<()> {
    let project = std::env::current_dir()
        .map_err(|e| InstallError::fs("resolve", std::path::Path::new("."), e))?;

    let selection = match ai {
        Some(value) => value.parse()?,
        None => {
            let detected = uipro_mobile::detect_assistant_folders(&project);
            if !detected.is_empty() {
                let names: Vec<String> = detected.iter().map(Assistant::to_string).collect();
                println!("Detected AI folders: {}", names.join(", "));
            }
            uipro_mobile::resolve_init_target(&project, &mut TerminalPrompter)?
        }
    };

    let assets = uipro_mobile::bundled_assets_dir()?;

    if !force {
        uipro_mobile::check_not_installed(&project, selection)?;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Installing UI/UX Mobile skill...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = uipro_mobile::install(&assets, &project, selection, force);
    spinner.finish_and_clear();
    result?;

    match selection {
        Selection::All => println!("UI/UX Mobile skill installed for Claude and Codex."),
        Selection::Only(a) => println!("UI/UX Mobile skill installed for {a}."),
    }
    println!();
    println!("Installation complete!");
    println!();
    println!("Test the skill with:");
    for assistant in selection.assistants() {
        println!(
            "  python3 {}/skills/ui-ux-mobile/scripts/search.py \"button\" --domain component",
            assistant.folder()
        );
    }
    Ok(())
}
