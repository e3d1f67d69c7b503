//! Contributions — one registered extension instance per hook kind.

use serde::{Deserialize, Serialize};

use notehub_core::deployment::Deployment;

use crate::hooks::kind::HookKind;
use crate::hooks::value::HookValue;

/// One extension contribution attached to a hook kind.
///
/// Contributions are immutable once registered and persist for the lifetime
/// of the process; there is no unregister operation. The `id` is intended
/// unique but the registry never enforces that — duplicates are stored
/// alongside each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    /// Caller-supplied identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// A brief description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The contributed value; its shape determines the hook kind.
    #[serde(flatten)]
    pub value: HookValue,
    /// Ordering in menus and execution. Lower is earlier.
    #[serde(default)]
    pub priority: i32,
    /// Deployments this contribution is enabled for (empty: all).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployments: Vec<Deployment>,
    /// Roles this contribution targets. Carried as metadata; authorization
    /// filtering happens outside the registry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

impl Contribution {
    /// Creates a contribution with default priority 0, no description, and
    /// no deployment or role restrictions.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: HookValue) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            value,
            priority: 0,
            deployments: Vec::new(),
            roles: Vec::new(),
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the priority. Lower values sort earlier in queries.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Restricts the contribution to the given deployments.
    pub fn with_deployments(mut self, deployments: impl IntoIterator<Item = Deployment>) -> Self {
        self.deployments = deployments.into_iter().collect();
        self
    }

    /// Sets the target roles.
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the hook kind this contribution belongs to.
    pub fn kind(&self) -> HookKind {
        self.value.kind()
    }
}
