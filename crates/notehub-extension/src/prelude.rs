//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use notehub_core::deployment::{Deployment, DeploymentContext, StaticDeployment};
pub use notehub_core::{AppError, AppResult};

pub use crate::contribution::Contribution;
pub use crate::discovery::{ExtensionDiscovery, ExtensionEntry, StaticDiscovery};
pub use crate::hooks::kind::HookKind;
pub use crate::hooks::value::{ComponentRef, HookValue, SettingsPanel};
pub use crate::registry::ExtensionRegistry;
