//! Extension system configuration.

use serde::{Deserialize, Serialize};

/// Extension system configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtensionsConfig {
    /// Whether to load extension modules automatically on startup.
    #[serde(default = "default_true")]
    pub auto_load: bool,
}

impl Default for ExtensionsConfig {
    fn default() -> Self {
        Self {
            auto_load: default_true(),
        }
    }
}

fn default_true() -> bool {
    true
}
