//! Webhooks extension for NoteHub.
//!
//! Contributes the settings panel where admins manage outgoing webhook
//! subscriptions. Enabled in every deployment.

pub mod extension;

pub use extension::WebhooksExtension;
