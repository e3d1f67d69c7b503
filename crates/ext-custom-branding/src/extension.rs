//! Custom branding entry point — registers with the NoteHub extension system.

use notehub_extension_sdk::prelude::*;

/// Custom branding extension for self-hosted installs.
#[derive(Debug, Default)]
pub struct CustomBrandingExtension;

impl CustomBrandingExtension {
    /// Creates the extension entry.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ExtensionEntry for CustomBrandingExtension {
    fn id(&self) -> &str {
        "custom-branding"
    }

    async fn register(&self, registry: &ExtensionRegistry) -> AppResult<()> {
        registry.register_all([
            contribution!(
                id: "custom-branding-icon",
                name: "Workspace logo",
                value: HookValue::Icon(ComponentRef::new("extensions/custom-branding/Logo")),
                description: "Replaces the stock logo in the sidebar and login screen",
                deployments: [Deployment::Community, Deployment::Enterprise],
            ),
            contribution!(
                id: "custom-branding-settings",
                name: "Branding",
                value: HookValue::Settings(SettingsPanel {
                    group: "Workspace".to_string(),
                    icon: "palette".to_string(),
                    component: ComponentRef::new("extensions/custom-branding/Settings"),
                }),
                description: "Upload a logo and pick brand colors",
                priority: 20,
                deployments: [Deployment::Community, Deployment::Enterprise],
                roles: ["admin"],
            ),
        ]);

        tracing::debug!("Custom branding contributions submitted");
        Ok(())
    }
}
