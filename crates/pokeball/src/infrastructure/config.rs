//! Client configuration
//!
//! Everything has a code-level default; the composition root may override
//! values before wiring the adapters.

use thiserror::Error;
use url::Url;

use crate::application::SettlePolicy;
use crate::domain::PokemonId;

/// Default public catalog host.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://pokeapi.co/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid catalog base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("catalog base URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),
}

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    base_url: Url,
}

impl CatalogConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(base_url.scheme().to_string()));
        }
        // `Url::join` replaces the last segment unless the path ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// The public catalog at `DEFAULT_CATALOG_BASE_URL`
    pub fn public() -> Result<Self, ConfigError> {
        Self::new(DEFAULT_CATALOG_BASE_URL)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET` endpoint for one catalog entry
    pub fn pokemon_url(&self, id: PokemonId) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("api/v2/pokemon/{id}"))
    }
}

/// Behaviour of the viewer screen. Provided through Dioxus context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerConfig {
    pub settle_policy: SettlePolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> PokemonId {
        PokemonId::new(n).unwrap()
    }

    #[test]
    fn public_points_at_the_public_catalog() {
        let config = CatalogConfig::public().unwrap();

        assert_eq!(
            config.pokemon_url(id(25)).unwrap().as_str(),
            "https://pokeapi.co/api/v2/pokemon/25"
        );
    }

    #[test]
    fn base_path_is_preserved_without_trailing_slash() {
        let config = CatalogConfig::new("http://127.0.0.1:8080/mirror").unwrap();

        assert_eq!(
            config.pokemon_url(id(1)).unwrap().as_str(),
            "http://127.0.0.1:8080/mirror/api/v2/pokemon/1"
        );
    }

    #[test]
    fn endpoint_has_no_query() {
        let url = CatalogConfig::public().unwrap().pokemon_url(id(100)).unwrap();
        assert_eq!(url.query(), None);
    }

    #[test]
    fn rejects_bad_urls() {
        assert!(matches!(
            CatalogConfig::new("not a url"),
            Err(ConfigError::InvalidUrl(_))
        ));
        assert!(matches!(
            CatalogConfig::new("ftp://pokeapi.co/"),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }

    #[test]
    fn viewer_defaults_to_last_write_wins() {
        assert_eq!(
            ViewerConfig::default().settle_policy,
            SettlePolicy::LastWriteWins
        );
    }
}
