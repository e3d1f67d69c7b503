//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use notehub_extension::prelude::*;

/// Builds a fresh registry for the given hosting target.
pub fn registry(hosting: Deployment) -> ExtensionRegistry {
    ExtensionRegistry::new(Arc::new(StaticDeployment(hosting)))
}

/// Discovery over a fixed entry list that counts how often it is consulted.
pub struct CountingDiscovery {
    entries: Vec<Arc<dyn ExtensionEntry>>,
    calls: AtomicUsize,
}

impl CountingDiscovery {
    pub fn new(entries: Vec<Arc<dyn ExtensionEntry>>) -> Self {
        Self {
            entries,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ExtensionDiscovery for CountingDiscovery {
    async fn discover(&self) -> Vec<Arc<dyn ExtensionEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entries.clone()
    }
}

/// Entry that registers a fixed set of contributions.
pub struct FixedEntry {
    pub id: String,
    pub contributions: Vec<Contribution>,
}

#[async_trait]
impl ExtensionEntry for FixedEntry {
    fn id(&self) -> &str {
        &self.id
    }

    async fn register(&self, registry: &ExtensionRegistry) -> AppResult<()> {
        registry.register_all(self.contributions.iter().cloned());
        Ok(())
    }
}

/// Entry that registers some contributions and then fails.
pub struct FailingEntry {
    pub id: String,
    pub before_failure: Vec<Contribution>,
}

#[async_trait]
impl ExtensionEntry for FailingEntry {
    fn id(&self) -> &str {
        &self.id
    }

    async fn register(&self, registry: &ExtensionRegistry) -> AppResult<()> {
        registry.register_all(self.before_failure.iter().cloned());
        Err(AppError::extension(format!(
            "module '{}' blew up during evaluation",
            self.id
        )))
    }
}
