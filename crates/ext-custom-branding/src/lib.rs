//! Custom branding extension for NoteHub.
//!
//! Lets self-hosted installs replace the stock workspace logo and wire up a
//! branding settings panel. The whole extension is deployment-gated: on the
//! cloud-hosted service none of its contributions register.

pub mod extension;

pub use extension::CustomBrandingExtension;
