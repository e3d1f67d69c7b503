//! Extension registry — deployment-gated registration and priority-ordered
//! queries, keyed by hook kind.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use dashmap::DashMap;
use tracing::{debug, warn};

use notehub_core::deployment::DeploymentContext;

use crate::contribution::Contribution;
use crate::discovery::ExtensionDiscovery;
use crate::hooks::kind::HookKind;

/// Registry of extension contributions, keyed by hook kind.
///
/// Construct one per process and share it behind an `Arc`; tests build a
/// fresh instance each for isolation. Registration is synchronous and
/// infallible for well-formed contributions; contributions disabled for the
/// current deployment are dropped without any observable effect.
pub struct ExtensionRegistry {
    /// Hook kind → contributions in registration order.
    hooks: DashMap<HookKind, Vec<Contribution>>,
    /// Deployment signal consulted during gating.
    deployment: Arc<dyn DeploymentContext>,
    /// Set once, after the first `load_extensions` call settles.
    loaded: AtomicBool,
}

impl ExtensionRegistry {
    /// Creates an empty registry gated by the given deployment context.
    pub fn new(deployment: Arc<dyn DeploymentContext>) -> Self {
        Self {
            hooks: DashMap::new(),
            deployment,
            loaded: AtomicBool::new(false),
        }
    }

    /// Registers a single contribution.
    ///
    /// Contributions not enabled for the current deployment are silently
    /// dropped. Enabled contributions are appended to their kind's list in
    /// arrival order; priority only matters at query time.
    pub fn register(&self, contribution: Contribution) {
        if !self.enabled_in_deployment(&contribution) {
            return;
        }

        debug!(
            kind = %contribution.kind(),
            name = %contribution.name,
            description = contribution.description.as_deref().unwrap_or(""),
            "Extension contribution registered"
        );

        self.hooks
            .entry(contribution.kind())
            .or_default()
            .push(contribution);
    }

    /// Registers a sequence of contributions, in order.
    pub fn register_all(&self, contributions: impl IntoIterator<Item = Contribution>) {
        for contribution in contributions {
            self.register(contribution);
        }
    }

    /// Returns all contributions for a hook kind, ordered by priority.
    ///
    /// Lower priority sorts earlier; equal priorities keep their original
    /// registration order. A kind nothing has registered for yields an
    /// empty vec, never an error.
    pub fn get_hooks(&self, kind: HookKind) -> Vec<Contribution> {
        let mut contributions = self
            .hooks
            .get(&kind)
            .map(|entries| entries.value().clone())
            .unwrap_or_default();

        // Vec::sort_by_key is stable, which the tie rule depends on.
        contributions.sort_by_key(|c| c.priority);
        contributions
    }

    /// Discovers and loads every extension module, exactly once.
    ///
    /// Each entry's registration future runs concurrently; an entry that
    /// fails is logged and skipped without affecting its siblings, and any
    /// contributions it registered before failing are kept. The loaded flag
    /// is set only after every entry has settled, so repeat calls return
    /// immediately without touching the discovery collaborator.
    ///
    /// Callers are expected to invoke this once at startup; overlapping
    /// first calls are not guarded against.
    pub async fn load_extensions(&self, discovery: &dyn ExtensionDiscovery) {
        if self.loaded.load(Ordering::Acquire) {
            return;
        }

        let entries = discovery.discover().await;
        debug!(modules = entries.len(), "Loading extension modules");

        let loads = entries.into_iter().map(|entry| async move {
            if let Err(e) = entry.register(self).await {
                warn!(module = entry.id(), error = %e, "Extension module failed to load");
            }
        });
        futures::future::join_all(loads).await;

        self.loaded.store(true, Ordering::Release);
    }

    /// Whether `load_extensions` has already run to completion.
    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::Acquire)
    }

    /// Deployment gate from the original hosting model: an empty set means
    /// enabled everywhere, `cloud` requires the cloud-hosted service, and
    /// `community`/`enterprise` both mean self-hosted. The latter two gate
    /// identically on purpose; do not collapse them into one label.
    fn enabled_in_deployment(&self, contribution: &Contribution) -> bool {
        use notehub_core::deployment::Deployment;

        let is_cloud = self.deployment.is_cloud_hosted();

        contribution.deployments.is_empty()
            || (contribution.deployments.contains(&Deployment::Cloud) && is_cloud)
            || (contribution.deployments.contains(&Deployment::Community) && !is_cloud)
            || (contribution.deployments.contains(&Deployment::Enterprise) && !is_cloud)
    }
}

impl std::fmt::Debug for ExtensionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionRegistry")
            .field("kinds", &self.hooks.len())
            .field("loaded", &self.loaded.load(Ordering::Acquire))
            .finish()
    }
}
