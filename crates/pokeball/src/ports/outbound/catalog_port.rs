//! Catalog Port - Object-safe HTTP boundary
//!
//! Adapters only perform the GET and hand back the raw body. Decoding lives
//! in the application layer so the same diagnostics are produced on every
//! platform.

use thiserror::Error;

use crate::domain::PokemonId;

/// Network or HTTP failure while talking to the catalog.
///
/// Carries the underlying error's description so it can be shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait CatalogPort: Send + Sync {
    /// GET the catalog entry for `id` and return the body of a 2xx response.
    ///
    /// Non-2xx statuses are reported as `TransportError`.
    async fn fetch_pokemon(&self, id: PokemonId) -> Result<String, TransportError>;
}
