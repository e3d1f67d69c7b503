//! # notehub-extension
//!
//! Extension framework for NoteHub. Provides:
//!
//! - Typed hook kinds with per-kind value shapes
//! - The [`ExtensionRegistry`]: deployment-gated registration and
//!   priority-ordered queries
//! - Two-phase discovery and one-shot async loading of extension modules
//!
//! UI surfaces query the registry by hook kind and own the interpretation
//! of each contribution's value. The registry never renders anything and
//! never walks the filesystem itself; discovery is an injected collaborator.

pub mod contribution;
pub mod discovery;
pub mod hooks;
pub mod prelude;
pub mod registry;

pub use contribution::Contribution;
pub use discovery::{ExtensionDiscovery, ExtensionEntry, StaticDiscovery};
pub use hooks::kind::HookKind;
pub use hooks::value::{ComponentRef, HookValue, SettingsPanel};
pub use registry::ExtensionRegistry;
