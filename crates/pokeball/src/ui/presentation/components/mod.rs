pub mod pokemon_card;
pub mod request_panel;
pub mod trigger_button;

pub use pokemon_card::PokemonCard;
pub use request_panel::{LoadingIndicator, RequestPanel};
pub use trigger_button::{trigger_label, TriggerButton, FIRST_THROW_LABEL, NEXT_THROW_LABEL};
