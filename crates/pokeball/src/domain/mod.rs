//! Domain types shared by every layer of the client

pub mod pokemon;
pub mod request_state;

pub use pokemon::{InvalidPokemonId, PokemonDetails, PokemonId};
pub use request_state::{RequestState, NOT_STARTED_PROMPT};
