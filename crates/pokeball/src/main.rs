//! Pokeball - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use std::sync::Arc;

use pokeball::infrastructure::{CatalogConfig, CatalogHttpClient, ConfigError, ViewerConfig};
use pokeball::ports::outbound::{CatalogPort, PlatformPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokeball=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Pokeball");

    // Platform
    let platform = pokeball::infrastructure::platform::create_platform();
    let platform: Arc<dyn PlatformPort> = Arc::new(platform);

    // HTTP
    let catalog = match create_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, "Invalid catalog configuration");
            return;
        }
    };

    // Launch Dioxus
    dioxus::LaunchBuilder::new()
        .with_context(platform)
        .with_context(ViewerConfig::default())
        .with_context(pokeball::presentation::Services::new(catalog))
        .launch(pokeball::app);
}

fn create_catalog() -> Result<Arc<dyn CatalogPort>, ConfigError> {
    let config = CatalogConfig::public()?;
    tracing::info!(base_url = %config.base_url(), "Using Pokemon catalog");
    Ok(Arc::new(CatalogHttpClient::new(config)))
}
