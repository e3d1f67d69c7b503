//! Webhooks entry point — registers with the NoteHub extension system.

use notehub_extension_sdk::prelude::*;

/// Webhooks extension.
#[derive(Debug, Default)]
pub struct WebhooksExtension;

impl WebhooksExtension {
    /// Creates the extension entry.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExtensionEntry for WebhooksExtension {
    fn id(&self) -> &str {
        "webhooks"
    }

    async fn register(&self, registry: &ExtensionRegistry) -> AppResult<()> {
        registry.register(contribution!(
            id: "webhooks-settings",
            name: "Webhooks",
            value: HookValue::Settings(SettingsPanel {
                group: "Integrations".to_string(),
                icon: "webhook".to_string(),
                component: ComponentRef::new("extensions/webhooks/Settings"),
            }),
            description: "Deliver workspace events over HTTP",
            priority: 10,
            roles: ["admin"],
        ));

        tracing::debug!("Webhooks contributions submitted");
        Ok(())
    }
}
