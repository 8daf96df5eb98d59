//! Catalog HTTP adapter
//!
//! `reqwest` on native targets, `gloo-net` in the browser. Both issue a single
//! unauthenticated GET with no timeout and hand back the body text.

use crate::domain::PokemonId;
use crate::infrastructure::config::CatalogConfig;
use crate::ports::outbound::{CatalogPort, TransportError};

/// HTTP client for the public Pokemon catalog
#[derive(Clone)]
pub struct CatalogHttpClient {
    config: CatalogConfig,
    #[cfg(not(target_arch = "wasm32"))]
    client: reqwest::Client,
}

impl CatalogHttpClient {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            #[cfg(not(target_arch = "wasm32"))]
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    fn endpoint(&self, id: PokemonId) -> Result<url::Url, TransportError> {
        self.config
            .pokemon_url(id)
            .map_err(|e| TransportError::new(format!("invalid catalog URL: {e}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait::async_trait]
impl CatalogPort for CatalogHttpClient {
    async fn fetch_pokemon(&self, id: PokemonId) -> Result<String, TransportError> {
        let url = self.endpoint(id)?;
        tracing::debug!(%url, "GET catalog entry");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| TransportError::new(describe_reqwest_error(&e)))?;

        response
            .text()
            .await
            .map_err(|e| TransportError::new(describe_reqwest_error(&e)))
    }
}

/// `reqwest::Error`'s `Display` omits the cause chain ("error sending
/// request"), so append the sources.
#[cfg(not(target_arch = "wasm32"))]
fn describe_reqwest_error(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

#[cfg(target_arch = "wasm32")]
#[async_trait::async_trait(?Send)]
impl CatalogPort for CatalogHttpClient {
    async fn fetch_pokemon(&self, id: PokemonId) -> Result<String, TransportError> {
        let url = self.endpoint(id)?;
        tracing::debug!(%url, "GET catalog entry");

        let response = gloo_net::http::Request::get(url.as_str())
            .send()
            .await
            .map_err(|e| TransportError::new(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::new(format!(
                "HTTP status {} {} for url ({})",
                response.status(),
                response.status_text(),
                url
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TransportError::new(e.to_string()))
    }
}
