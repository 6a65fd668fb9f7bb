//! Installation state checks.
//!
//! Pure existence probes against the project directory. Existence of the
//! top-level skill directory is the sole installed/not-installed signal;
//! partial installations are not distinguished.

use std::path::{Path, PathBuf};

use crate::models::{Assistant, SKILL_PATH};

/// Path of the skill directory for `assistant` under `project`.
#[must_use]
pub fn skill_path(project: &Path, assistant: Assistant) -> PathBuf {
    project.join(assistant.folder()).join(SKILL_PATH)
}

/// Returns `true` iff the skill directory exists for `assistant`.
#[must_use]
pub fn is_skill_installed(project: &Path, assistant: Assistant) -> bool {
    skill_path(project, assistant).exists()
}

/// Assistants whose configuration folder exists at the project root,
/// in fixed enumeration order.
#[must_use]
pub fn detect_assistant_folders(project: &Path) -> Vec<Assistant> {
    Assistant::ALL
        .into_iter()
        .filter(|a| project.join(a.folder()).exists())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn nothing_detected_in_empty_project() {
        let dir = tempdir().unwrap();
        assert!(detect_assistant_folders(dir.path()).is_empty());
        assert!(!is_skill_installed(dir.path(), Assistant::Claude));
        assert!(!is_skill_installed(dir.path(), Assistant::Codex));
    }

    #[test]
    fn detects_each_folder_independently() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".codex")).unwrap();
        assert_eq!(detect_assistant_folders(dir.path()), vec![Assistant::Codex]);

        fs::create_dir(dir.path().join(".claude")).unwrap();
        assert_eq!(
            detect_assistant_folders(dir.path()),
            vec![Assistant::Claude, Assistant::Codex]
        );
    }

    #[test]
    fn folder_without_skill_is_not_installed() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".claude/skills")).unwrap();
        assert!(!is_skill_installed(dir.path(), Assistant::Claude));
    }

    #[test]
    fn installed_iff_skill_directory_exists() {
        let dir = tempdir().unwrap();
        let path = skill_path(dir.path(), Assistant::Claude);
        fs::create_dir_all(&path).unwrap();
        assert!(is_skill_installed(dir.path(), Assistant::Claude));

        fs::remove_dir_all(&path).unwrap();
        assert!(!is_skill_installed(dir.path(), Assistant::Claude));
    }

    #[test]
    fn skill_path_layout() {
        let path = skill_path(Path::new("/p"), Assistant::Codex);
        assert_eq!(path, Path::new("/p/.codex/skills/ui-ux-mobile"));
    }
}
