//! Copies the bundled skill asset tree into a project.
//!
//! Overwrite semantics are delete-then-copy: with `force`, the existing
//! destination tree is removed before copying, so the result is a full
//! replacement of whatever was there, never a merge.

use std::path::{Path, PathBuf};

use crate::detect::{is_skill_installed, skill_path};
use crate::errors::{InstallError, Result};
use crate::fs_util::{copy_dir_recursive, create_dir_chain, remove_dir_tree};
use crate::models::{Assistant, Selection, SKILL_PATH};

/// Locate the bundled `assets/` directory.
///
/// Assets live at a fixed location relative to the installed binary; the
/// search walks up from the executable's directory so both an installed
/// layout (`assets/` next to the binary) and a source checkout
/// (`target/debug/` under the repository root) resolve.
pub fn bundled_assets_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| InstallError::fs("locate", Path::new("current executable"), e))?;
    let mut dir = exe.parent();
    while let Some(d) = dir {
        let candidate = d.join("assets");
        if candidate.is_dir() {
            return Ok(candidate);
        }
        dir = d.parent();
    }
    Err(InstallError::AssetMissing {
        path: exe.with_file_name("assets"),
    })
}

/// Install the skill for one assistant.
///
/// Fails with `AlreadyInstalled` when the destination exists and `force`
/// is off; with `force`, the existing tree is removed first (destructive,
/// no backup).
pub fn install_skill(
    assets: &Path,
    project: &Path,
    assistant: Assistant,
    force: bool,
) -> Result<()> {
    let source = assets.join(assistant.folder()).join(SKILL_PATH);
    if !source.is_dir() {
        return Err(InstallError::AssetMissing { path: source });
    }

    let destination = skill_path(project, assistant);
    create_dir_chain(destination.parent().unwrap_or(project))?;

    if destination.exists() {
        if !force {
            return Err(InstallError::AlreadyInstalled { path: destination });
        }
        remove_dir_tree(&destination)?;
    }

    copy_dir_recursive(&source, &destination)
}

/// Install the skill for every assistant the selection covers, in fixed
/// enumeration order. Fail-fast: a failure aborts remaining targets and
/// already-completed ones are not rolled back.
pub fn install(assets: &Path, project: &Path, selection: Selection, force: bool) -> Result<()> {
    for assistant in selection.assistants() {
        install_skill(assets, project, assistant, force)?;
    }
    Ok(())
}

/// For a no-force install, fail before any copy if any covered assistant
/// already has the skill, so a blocked multi-target install writes nothing.
pub fn check_not_installed(project: &Path, selection: Selection) -> Result<()> {
    for assistant in selection.assistants() {
        if is_skill_installed(project, assistant) {
            return Err(InstallError::AlreadyInstalled {
                path: skill_path(project, assistant),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    /// Fabricate an assets tree holding a distinct payload per assistant.
    fn make_assets(root: &Path) -> PathBuf {
        let assets = root.join("assets");
        for assistant in Assistant::ALL {
            let skill = assets.join(assistant.folder()).join(SKILL_PATH);
            fs::create_dir_all(skill.join("scripts")).unwrap();
            fs::write(skill.join("SKILL.md"), format!("skill for {assistant}\n")).unwrap();
            fs::write(skill.join("scripts/search.py"), "# search\n").unwrap();
        }
        assets
    }

    #[test]
    fn install_creates_full_tree() {
        let dir = tempdir().unwrap();
        let assets = make_assets(dir.path());
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        install_skill(&assets, &project, Assistant::Claude, false).unwrap();

        let dest = skill_path(&project, Assistant::Claude);
        assert_eq!(
            fs::read_to_string(dest.join("SKILL.md")).unwrap(),
            "skill for claude\n"
        );
        assert!(dest.join("scripts/search.py").is_file());
        assert!(!is_skill_installed(&project, Assistant::Codex));
    }

    #[test]
    fn install_all_covers_every_assistant() {
        let dir = tempdir().unwrap();
        let assets = make_assets(dir.path());
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        install(&assets, &project, Selection::All, false).unwrap();

        for assistant in Assistant::ALL {
            assert!(is_skill_installed(&project, assistant));
        }
    }

    #[test]
    fn existing_destination_without_force_is_untouched() {
        let dir = tempdir().unwrap();
        let assets = make_assets(dir.path());
        let project = dir.path().join("project");
        let dest = skill_path(&project, Assistant::Claude);
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("existing.txt"), "keep me").unwrap();

        let err = install_skill(&assets, &project, Assistant::Claude, false).unwrap_err();
        assert!(matches!(err, InstallError::AlreadyInstalled { .. }));
        assert_eq!(
            fs::read_to_string(dest.join("existing.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn force_replaces_destination_entirely() {
        let dir = tempdir().unwrap();
        let assets = make_assets(dir.path());
        let project = dir.path().join("project");
        let dest = skill_path(&project, Assistant::Codex);
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("stale.txt"), "old").unwrap();

        install_skill(&assets, &project, Assistant::Codex, true).unwrap();

        assert!(!dest.join("stale.txt").exists());
        assert_eq!(
            fs::read_to_string(dest.join("SKILL.md")).unwrap(),
            "skill for codex\n"
        );
    }

    #[test]
    fn force_install_is_idempotent() {
        let dir = tempdir().unwrap();
        let assets = make_assets(dir.path());
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        install_skill(&assets, &project, Assistant::Claude, true).unwrap();
        install_skill(&assets, &project, Assistant::Claude, true).unwrap();

        let dest = skill_path(&project, Assistant::Claude);
        assert_eq!(
            fs::read_to_string(dest.join("SKILL.md")).unwrap(),
            "skill for claude\n"
        );
        assert!(dest.join("scripts/search.py").is_file());
    }

    #[test]
    fn missing_source_assets_are_fatal() {
        let dir = tempdir().unwrap();
        let assets = dir.path().join("assets");
        fs::create_dir(&assets).unwrap();
        let project = dir.path().join("project");
        fs::create_dir(&project).unwrap();

        let err = install_skill(&assets, &project, Assistant::Claude, false).unwrap_err();
        assert!(matches!(err, InstallError::AssetMissing { .. }));
        assert!(!is_skill_installed(&project, Assistant::Claude));
    }

    #[test]
    fn precheck_blocks_before_any_copy() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("project");
        fs::create_dir_all(skill_path(&project, Assistant::Codex)).unwrap();

        let err = check_not_installed(&project, Selection::All).unwrap_err();
        assert!(matches!(err, InstallError::AlreadyInstalled { .. }));
        // Claude was never written.
        assert!(!is_skill_installed(&project, Assistant::Claude));
    }
}
