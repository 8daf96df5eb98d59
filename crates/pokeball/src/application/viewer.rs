//! Request/decode/display state machine behind the viewer screen
//!
//! `select` moves to `Pending` synchronously, so a stale result is never
//! displayed after a new throw. `settle` applies the outcome of a lookup
//! according to the configured `SettlePolicy`.

use crate::application::error::CatalogError;
use crate::domain::{PokemonDetails, PokemonId, RequestState};

/// What to do with a lookup that settles after a newer throw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettlePolicy {
    /// Apply every settlement in arrival order. A slow first response can
    /// overwrite the result of a faster second one.
    #[default]
    LastWriteWins,
    /// Discard settlements whose throw has been superseded.
    LatestTriggerOnly,
}

/// Handle tying a spawned lookup back to the throw that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    id: PokemonId,
}

impl RequestTicket {
    pub fn id(&self) -> PokemonId {
        self.id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of `Viewer::settle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Applied,
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewer {
    selected: Option<PokemonId>,
    state: RequestState,
    generation: u64,
    policy: SettlePolicy,
}

impl Viewer {
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Record a new throw and start waiting for its lookup.
    pub fn select(&mut self, id: PokemonId) -> RequestTicket {
        self.selected = Some(id);
        self.generation += 1;
        self.state = RequestState::Pending;

        RequestTicket {
            generation: self.generation,
            id,
        }
    }

    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PokemonDetails, CatalogError>,
    ) -> Settlement {
        let superseded = ticket.generation != self.generation;
        if superseded && self.policy == SettlePolicy::LatestTriggerOnly {
            tracing::warn!(
                pokemon_id = ticket.id.get(),
                generation = ticket.generation,
                latest = self.generation,
                "Discarding superseded lookup"
            );
            return Settlement::Discarded;
        }
        if superseded {
            tracing::debug!(
                pokemon_id = ticket.id.get(),
                generation = ticket.generation,
                latest = self.generation,
                "Applying superseded lookup (last write wins)"
            );
        }

        self.state = match outcome {
            Ok(details) => RequestState::Succeeded(details),
            Err(e) => RequestState::Failed(e.to_string()),
        };
        Settlement::Applied
    }

    pub fn selected(&self) -> Option<PokemonId> {
        self.selected
    }

    /// Whether a Pokeball has ever been thrown
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn policy(&self) -> SettlePolicy {
        self.policy
    }
}
