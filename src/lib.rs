pub mod detect;
pub mod errors;
mod fs_util;
pub mod installer;
pub mod models;
pub mod resolver;
pub mod versions;

// Re-export key types at crate root for convenience.
pub use detect::{detect_assistant_folders, is_skill_installed, skill_path};
pub use errors::{InstallError, Result};
pub use installer::{bundled_assets_dir, check_not_installed, install, install_skill};
pub use models::{Assistant, Selection, VersionInfo, SKILL_PATH};
pub use resolver::{
    resolve_init_target, resolve_update_target, Prompter, ScriptedPrompter, TerminalPrompter,
};
