//! Two-phase extension discovery.
//!
//! Phase one enumerates the extension entry points available to this build;
//! phase two invokes each entry's explicit `register` function against the
//! registry. Keeping enumeration behind a trait decouples the registry from
//! any particular packaging mechanism and lets tests supply a fixed set.

use std::sync::Arc;

use async_trait::async_trait;

use notehub_core::AppResult;

use crate::registry::ExtensionRegistry;

/// One extension module's entry point.
///
/// `register` is expected to call [`ExtensionRegistry::register`] zero or
/// more times. It runs at most once per process, during
/// [`ExtensionRegistry::load_extensions`].
#[async_trait]
pub trait ExtensionEntry: Send + Sync {
    /// Stable module identifier, used in diagnostics.
    fn id(&self) -> &str;

    /// Registers this module's contributions.
    async fn register(&self, registry: &ExtensionRegistry) -> AppResult<()>;
}

/// Enumerates the extension entry points available to this process.
#[async_trait]
pub trait ExtensionDiscovery: Send + Sync {
    /// Returns every available entry point.
    async fn discover(&self) -> Vec<Arc<dyn ExtensionEntry>>;
}

/// Discovery over a fixed list of entries assembled at build time.
///
/// The host links its extension crates directly and lists their entries
/// here; nothing is resolved from the filesystem at runtime.
#[derive(Default)]
pub struct StaticDiscovery {
    entries: Vec<Arc<dyn ExtensionEntry>>,
}

impl StaticDiscovery {
    /// Creates an empty discovery set.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an entry point.
    pub fn with_entry(mut self, entry: Arc<dyn ExtensionEntry>) -> Self {
        self.entries.push(entry);
        self
    }
}

#[async_trait]
impl ExtensionDiscovery for StaticDiscovery {
    async fn discover(&self) -> Vec<Arc<dyn ExtensionEntry>> {
        self.entries.clone()
    }
}

impl std::fmt::Debug for StaticDiscovery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticDiscovery")
            .field("entries", &self.entries.len())
            .finish()
    }
}
