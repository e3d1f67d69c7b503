//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod extensions;
pub mod logging;

use serde::{Deserialize, Serialize};

use self::extensions::ExtensionsConfig;
use self::logging::LoggingConfig;

use crate::deployment::Deployment;
use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment classification of this process.
    #[serde(default)]
    pub deployment: DeploymentConfig,
    /// Extension system settings.
    #[serde(default)]
    pub extensions: ExtensionsConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment classification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentConfig {
    /// Which deployment target this process runs as.
    #[serde(default = "default_hosting")]
    pub hosting: Deployment,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            hosting: default_hosting(),
        }
    }
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `NOTEHUB_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("NOTEHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn default_hosting() -> Deployment {
    Deployment::Community
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_community_hosting() {
        let config: AppConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.deployment.hosting, Deployment::Community);
        assert!(config.extensions.auto_load);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_hosting_parsed_from_section() {
        let config: AppConfig =
            serde_json::from_str(r#"{"deployment": {"hosting": "cloud"}}"#).expect("deserialize");
        assert_eq!(config.deployment.hosting, Deployment::Cloud);
    }
}
