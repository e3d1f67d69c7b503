//! Enumeration of all hook kinds in the system.

use serde::{Deserialize, Serialize};

/// The categories of extension point a contribution can attach to.
///
/// Each kind has a fixed value shape; see
/// [`HookValue`](super::value::HookValue) for the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookKind {
    /// A settings panel contributed to the preferences UI.
    Settings,
    /// An icon component made available to icon pickers.
    Icon,
}

impl HookKind {
    /// Returns the string name of this hook kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Icon => "icon",
        }
    }
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
