//! Lifecycle of one outbound catalog lookup

use super::PokemonDetails;

/// Text shown before the first Pokeball is thrown.
pub const NOT_STARTED_PROMPT: &str =
    "Throw your first Pokeball by clicking the button to catch a random Pokemon!";

/// Exactly one variant is active at a time. Only the viewer state machine
/// moves between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState {
    /// No Pokeball thrown yet
    #[default]
    NotStarted,
    /// A lookup is in flight
    Pending,
    /// Transport or decode failure, already formatted for display
    Failed(String),
    Succeeded(PokemonDetails),
}

impl RequestState {
    /// Informational prompt attached to `NotStarted`. Not an error.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            RequestState::NotStarted => Some(NOT_STARTED_PROMPT),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    /// True once a lookup has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, RequestState::Failed(_) | RequestState::Succeeded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_started_with_prompt() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::NotStarted);
        assert_eq!(state.prompt(), Some(NOT_STARTED_PROMPT));
        assert!(!state.is_settled());
    }

    #[test]
    fn only_not_started_carries_the_prompt() {
        assert_eq!(RequestState::Pending.prompt(), None);
        assert_eq!(RequestState::Failed("boom".into()).prompt(), None);
        assert_eq!(
            RequestState::Succeeded(PokemonDetails::default()).prompt(),
            None
        );
    }

    #[test]
    fn settled_variants() {
        assert!(RequestState::Pending.is_pending());
        assert!(!RequestState::Pending.is_settled());
        assert!(RequestState::Failed(String::new()).is_settled());
        assert!(RequestState::Succeeded(PokemonDetails::named("mew")).is_settled());
    }
}
