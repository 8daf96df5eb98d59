pub mod config;
pub mod http_client;
pub mod platform;

pub use config::{CatalogConfig, ConfigError, ViewerConfig, DEFAULT_CATALOG_BASE_URL};
pub use http_client::CatalogHttpClient;
