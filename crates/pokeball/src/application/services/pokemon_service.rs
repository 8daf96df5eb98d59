//! Pokemon lookup service
//!
//! Performs exactly one catalog fetch per call and decodes the body. There is
//! no retry, timeout, or cancellation; the caller decides what to do with a
//! result that arrives late.

use std::sync::Arc;

use crate::application::decoder::decode_pokemon_details;
use crate::application::error::CatalogError;
use crate::domain::{PokemonDetails, PokemonId};
use crate::ports::outbound::CatalogPort;

/// Service for looking up Pokemon in the catalog
///
/// Depends on the `CatalogPort` trait, not the concrete HTTP client, so
/// tests can substitute `MockCatalogPort`.
pub struct PokemonService {
    catalog: Arc<dyn CatalogPort>,
}

impl PokemonService {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch and decode the catalog entry for `id`
    pub async fn fetch_details(&self, id: PokemonId) -> Result<PokemonDetails, CatalogError> {
        tracing::debug!(pokemon_id = id.get(), "Requesting catalog entry");

        let body = self.catalog.fetch_pokemon(id).await.map_err(|e| {
            tracing::warn!(pokemon_id = id.get(), error = %e, "Catalog request failed");
            CatalogError::from(e)
        })?;

        let details = decode_pokemon_details(&body).map_err(|e| {
            tracing::warn!(
                pokemon_id = id.get(),
                fields = ?e.paths().collect::<Vec<_>>(),
                "Catalog response failed validation"
            );
            CatalogError::from(e)
        })?;

        tracing::info!(
            pokemon_id = id.get(),
            name = details.name.as_deref().unwrap_or_default(),
            "Caught Pokemon"
        );
        Ok(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::{MockCatalogPort, TransportError};
    use mockall::predicate::*;

    fn id(n: u32) -> PokemonId {
        PokemonId::new(n).unwrap()
    }

    #[tokio::test]
    async fn decodes_a_successful_response() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_fetch_pokemon()
            .with(eq(id(25)))
            .times(1)
            .returning(|_| Ok(r#"{"id": 25, "name": "pikachu", "height": 4}"#.to_string()));

        let service = PokemonService::new(Arc::new(catalog));
        let details = service.fetch_details(id(25)).await.unwrap();

        assert_eq!(details.name.as_deref(), Some("pikachu"));
        assert_eq!(details.id, Some(25.0));
        assert_eq!(details.height, Some(4.0));
        assert_eq!(details.weight, None);
    }

    #[tokio::test]
    async fn transport_failure_keeps_the_underlying_text() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_fetch_pokemon()
            .times(1)
            .returning(|_| Err(TransportError::new("error sending request: connection refused")));

        let service = PokemonService::new(Arc::new(catalog));
        let err = service.fetch_details(id(3)).await.unwrap_err();

        assert!(matches!(err, CatalogError::Transport(_)));
        assert_eq!(
            err.to_string(),
            "Request failed with error: error sending request: connection refused"
        );
    }

    #[tokio::test]
    async fn shape_mismatch_is_a_decode_error() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_fetch_pokemon()
            .times(1)
            .returning(|_| Ok(r#"{"name": "onix", "height": "tall"}"#.to_string()));

        let service = PokemonService::new(Arc::new(catalog));
        let err = service.fetch_details(id(95)).await.unwrap_err();

        match err {
            CatalogError::Decode(decode) => {
                assert_eq!(decode.paths().collect::<Vec<_>>(), vec!["height"]);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn no_retry_after_failure() {
        let mut catalog = MockCatalogPort::new();
        catalog
            .expect_fetch_pokemon()
            .times(1)
            .returning(|_| Err(TransportError::new("HTTP status 503 Service Unavailable")));

        let service = PokemonService::new(Arc::new(catalog));

        assert!(service.fetch_details(id(10)).await.is_err());
    }
}
