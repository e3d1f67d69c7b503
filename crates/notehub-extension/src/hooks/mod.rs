//! Hook model — kinds and their typed value shapes.

pub mod kind;
pub mod value;

pub use kind::HookKind;
pub use value::{ComponentRef, HookValue, SettingsPanel};
