//! Service providers for the presentation layer
//!
//! Components use `use_context::<Services>()` to reach application services
//! without depending on infrastructure adapter types.

use std::sync::Arc;

use crate::application::services::PokemonService;
use crate::ports::outbound::CatalogPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub pokemon: Arc<PokemonService>,
}

impl Services {
    /// Create all services with the given catalog port
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            pokemon: Arc::new(PokemonService::new(catalog)),
        }
    }
}
