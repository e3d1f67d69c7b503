//! Integration tests for extension discovery and one-shot loading.

mod common;

use std::sync::Arc;

use notehub_core::deployment::Deployment;
use notehub_extension::{
    ComponentRef, Contribution, ExtensionEntry, HookKind, HookValue, StaticDiscovery,
};

use ext_custom_branding::CustomBrandingExtension;
use ext_webhooks::WebhooksExtension;

fn icon(id: &str, name: &str) -> Contribution {
    Contribution::new(
        id,
        name,
        HookValue::Icon(ComponentRef::new(format!("extensions/{id}/Icon"))),
    )
}

#[tokio::test]
async fn test_second_load_does_no_discovery_work() {
    let reg = common::registry(Deployment::Community);
    let discovery = common::CountingDiscovery::new(vec![Arc::new(common::FixedEntry {
        id: "fixed".to_string(),
        contributions: vec![icon("fixed", "Fixed")],
    })]);

    reg.load_extensions(&discovery).await;
    let after_first = reg.get_hooks(HookKind::Icon);

    reg.load_extensions(&discovery).await;
    let after_second = reg.get_hooks(HookKind::Icon);

    assert_eq!(discovery.calls(), 1);
    assert_eq!(after_first, after_second);
}

#[tokio::test]
async fn test_failing_module_does_not_stop_siblings_or_loading() {
    let reg = common::registry(Deployment::Community);
    let discovery = common::CountingDiscovery::new(vec![
        Arc::new(common::FailingEntry {
            id: "broken".to_string(),
            before_failure: vec![icon("broken-partial", "Partial")],
        }),
        Arc::new(common::FixedEntry {
            id: "healthy".to_string(),
            contributions: vec![icon("healthy", "Healthy")],
        }),
    ]);

    reg.load_extensions(&discovery).await;

    assert!(reg.is_loaded());
    let ids: Vec<String> = reg
        .get_hooks(HookKind::Icon)
        .into_iter()
        .map(|c| c.id)
        .collect();
    // The healthy sibling registered, and the broken module's partial
    // registrations before its failure survive.
    assert!(ids.contains(&"healthy".to_string()));
    assert!(ids.contains(&"broken-partial".to_string()));
}

#[tokio::test]
async fn test_bundled_extensions_self_hosted() {
    let reg = common::registry(Deployment::Enterprise);
    let discovery = StaticDiscovery::new()
        .with_entry(Arc::new(CustomBrandingExtension::new()))
        .with_entry(Arc::new(WebhooksExtension::new()));

    reg.load_extensions(&discovery).await;

    let panels = reg.get_hooks(HookKind::Settings);
    let names: Vec<&str> = panels.iter().map(|c| c.name.as_str()).collect();
    // Webhooks (priority 10) sorts before Branding (priority 20).
    assert_eq!(names, ["Webhooks", "Branding"]);
    assert_eq!(reg.get_hooks(HookKind::Icon).len(), 1);
}

#[tokio::test]
async fn test_bundled_extensions_on_cloud() {
    let reg = common::registry(Deployment::Cloud);
    let discovery = StaticDiscovery::new()
        .with_entry(Arc::new(CustomBrandingExtension::new()))
        .with_entry(Arc::new(WebhooksExtension::new()));

    reg.load_extensions(&discovery).await;

    let panels = reg.get_hooks(HookKind::Settings);
    let names: Vec<&str> = panels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Webhooks"]);
    assert!(reg.get_hooks(HookKind::Icon).is_empty());
}

#[tokio::test]
async fn test_entry_registering_nothing_is_fine() {
    struct SilentEntry;

    #[async_trait::async_trait]
    impl ExtensionEntry for SilentEntry {
        fn id(&self) -> &str {
            "silent"
        }

        async fn register(
            &self,
            _registry: &notehub_extension::ExtensionRegistry,
        ) -> notehub_core::AppResult<()> {
            Ok(())
        }
    }

    let reg = common::registry(Deployment::Community);
    let discovery = StaticDiscovery::new().with_entry(Arc::new(SilentEntry));
    reg.load_extensions(&discovery).await;

    assert!(reg.is_loaded());
    assert!(reg.get_hooks(HookKind::Icon).is_empty());
    assert!(reg.get_hooks(HookKind::Settings).is_empty());
}
