use std::time::Duration;

use indicatif::ProgressBar;

use uipro_mobile::errors::{InstallError, Result};
use uipro_mobile::models::Selection;
use uipro_mobile::resolver::TerminalPrompter;

pub(crate) fn run(ai: Option<String>) {
    if let Err(e) = run_inner(ai) {
        eprintln!("uipro-mobile update: {e}");
        std::process::exit(1);
    }
}

fn run_inner(ai: Option<String>) -> Result<()> {
    let project = std::env::current_dir()
        .map_err(|e| InstallError::fs("resolve", std::path::Path::new("."), e))?;

    let selection = match ai {
        Some(value) => value.parse()?,
        None => uipro_mobile::resolve_update_target(&project, &mut TerminalPrompter)?,
    };

    // An explicitly named assistant must already be installed.
    if let Selection::Only(assistant) = selection {
        if !uipro_mobile::is_skill_installed(&project, assistant) {
            return Err(InstallError::NotInstalled {
                message: format!(
                    "no {assistant} installation found; run `uipro-mobile init --ai {assistant}` first"
                ),
            });
        }
    }

    let assets = uipro_mobile::bundled_assets_dir()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Updating UI/UX Mobile skill...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let result = uipro_mobile::install(&assets, &project, selection, true);
    spinner.finish_and_clear();
    result?;

    match selection {
        Selection::All => println!("UI/UX Mobile skill updated for all installations."),
        Selection::Only(a) => println!("UI/UX Mobile skill updated for {a}."),
    }
    println!("Update complete!");
    Ok(())
}
