use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::errors::InstallError;

/// Relative path of the skill inside an assistant's configuration folder.
pub const SKILL_PATH: &str = "skills/ui-ux-mobile";

/// A supported AI assistant integration.
///
/// Each assistant owns one configuration folder at the project root. The
/// set is closed; adding an assistant means extending this enum, `ALL`,
/// and `folder()` in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assistant {
    Claude,
    Codex,
}

impl Assistant {
    /// Every concrete assistant, in the fixed enumeration order used for
    /// detection and "install all".
    pub const ALL: [Assistant; 2] = [Assistant::Claude, Assistant::Codex];

    /// Name of this assistant's configuration folder at the project root.
    #[must_use]
    pub fn folder(self) -> &'static str {
        match self {
            Assistant::Claude => ".claude",
            Assistant::Codex => ".codex",
        }
    }
}

impl fmt::Display for Assistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assistant::Claude => write!(f, "claude"),
            Assistant::Codex => write!(f, "codex"),
        }
    }
}

/// What one invocation acts on: a single assistant or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Only(Assistant),
    All,
}

impl Selection {
    /// The fixed menu offered when prompting: every assistant plus "all".
    pub const CHOICES: [Selection; 3] = [
        Selection::Only(Assistant::Claude),
        Selection::Only(Assistant::Codex),
        Selection::All,
    ];

    /// Concrete assistants covered by this selection, in fixed order.
    #[must_use]
    pub fn assistants(self) -> Vec<Assistant> {
        match self {
            Selection::Only(a) => vec![a],
            Selection::All => Assistant::ALL.to_vec(),
        }
    }

    /// Comma-separated list of accepted selector strings.
    #[must_use]
    pub fn valid_values() -> String {
        Selection::CHOICES
            .iter()
            .map(Selection::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Only(a) => a.fmt(f),
            Selection::All => write!(f, "all"),
        }
    }
}

impl FromStr for Selection {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claude" => Ok(Selection::Only(Assistant::Claude)),
            "codex" => Ok(Selection::Only(Assistant::Codex)),
            "all" => Ok(Selection::All),
            other => Err(InstallError::InvalidInput {
                value: other.to_string(),
                valid: Selection::valid_values(),
            }),
        }
    }
}

/// One entry of the static changelog printed by `versions`.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub version: &'static str,
    pub date: &'static str,
    pub changes: &'static [&'static str],
}
