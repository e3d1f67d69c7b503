//! Typed hook values — each hook kind carries a different value shape.

use serde::{Deserialize, Serialize};

use super::kind::HookKind;

/// Reference to a client-side component by its bundle module identifier.
///
/// The host serves a web client; contributions point at components inside
/// that client's bundle (e.g. `"extensions/webhooks/Settings"`). The
/// registry treats the identifier as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRef(pub String);

impl ComponentRef {
    /// Creates a component reference from a bundle module identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the bundle module identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComponentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Value shape of a [`HookKind::Settings`] contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPanel {
    /// Which settings group the panel appears under (e.g. "Workspace").
    pub group: String,
    /// Icon name shown next to the panel entry.
    pub icon: String,
    /// The panel component itself.
    pub component: ComponentRef,
}

/// A hook value, tagged by the kind it belongs to.
///
/// The kind of a contribution is derived from its value, so a kind and a
/// value shape can never disagree; consumers match exhaustively on the
/// variant for their surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HookValue {
    /// A settings panel descriptor.
    Settings(SettingsPanel),
    /// An icon component.
    Icon(ComponentRef),
}

impl HookValue {
    /// Returns the hook kind this value belongs to.
    pub fn kind(&self) -> HookKind {
        match self {
            Self::Settings(_) => HookKind::Settings,
            Self::Icon(_) => HookKind::Icon,
        }
    }
}
