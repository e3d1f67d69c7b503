//! # notehub-extension-sdk
//!
//! SDK for developing NoteHub extensions.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use notehub_extension_sdk::prelude::*;
//!
//! struct MyExtension;
//!
//! #[async_trait]
//! impl ExtensionEntry for MyExtension {
//!     fn id(&self) -> &str {
//!         "my-extension"
//!     }
//!
//!     async fn register(&self, registry: &ExtensionRegistry) -> AppResult<()> {
//!         registry.register(contribution!(
//!             id: "my-extension",
//!             name: "My Extension",
//!             value: HookValue::Icon(ComponentRef::new("extensions/my-extension/Icon")),
//!         ));
//!         Ok(())
//!     }
//! }
//! ```

pub mod macros;

/// Prelude for convenient imports.
pub mod prelude {
    pub use async_trait::async_trait;

    pub use notehub_core::deployment::{Deployment, DeploymentContext, StaticDeployment};
    pub use notehub_core::{AppError, AppResult};
    pub use notehub_extension::contribution::Contribution;
    pub use notehub_extension::discovery::ExtensionEntry;
    pub use notehub_extension::hooks::kind::HookKind;
    pub use notehub_extension::hooks::value::{ComponentRef, HookValue, SettingsPanel};
    pub use notehub_extension::registry::ExtensionRegistry;

    pub use crate::contribution;
}
