//! NoteHub extension host.
//!
//! Wires configuration, the deployment context, and the extension registry
//! together, loads every bundled extension module, and reports the ordered
//! contributions per hook kind.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use ext_custom_branding::CustomBrandingExtension;
use ext_webhooks::WebhooksExtension;
use notehub_core::config::AppConfig;
use notehub_core::deployment::StaticDeployment;
use notehub_core::error::AppError;
use notehub_extension::{ExtensionRegistry, HookKind, StaticDiscovery};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Extension host error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("NOTEHUB_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Load all bundled extensions and report what registered
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        hosting = %config.deployment.hosting,
        "Starting NoteHub extension host v{}",
        env!("CARGO_PKG_VERSION")
    );

    let deployment = Arc::new(StaticDeployment(config.deployment.hosting));
    let registry = ExtensionRegistry::new(deployment);

    let discovery = StaticDiscovery::new()
        .with_entry(Arc::new(CustomBrandingExtension::new()))
        .with_entry(Arc::new(WebhooksExtension::new()));

    if config.extensions.auto_load {
        registry.load_extensions(&discovery).await;
    } else {
        tracing::warn!("Extension auto-load disabled; registry stays empty");
    }

    for kind in [HookKind::Settings, HookKind::Icon] {
        let hooks = registry.get_hooks(kind);
        tracing::info!(kind = %kind, count = hooks.len(), "Registered contributions");
        for c in &hooks {
            tracing::info!(
                kind = %kind,
                id = %c.id,
                name = %c.name,
                priority = c.priority,
                "  contribution"
            );
        }
    }

    Ok(())
}
