//! Viewer state management using Dioxus signals
//!
//! Thin reactive wrapper around `application::Viewer`. Writing through the
//! signal re-renders every component that read it.

use dioxus::prelude::*;

use crate::application::{CatalogError, RequestTicket, SettlePolicy, Settlement, Viewer};
use crate::domain::{PokemonDetails, PokemonId, RequestState};

/// Signal-backed viewer state, provided as Dioxus context
#[derive(Clone, Copy)]
pub struct ViewerState {
    viewer: Signal<Viewer>,
}

impl ViewerState {
    /// Must be called inside an active Dioxus runtime.
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            viewer: Signal::new(Viewer::new(policy)),
        }
    }

    pub fn select(&mut self, id: PokemonId) -> RequestTicket {
        self.viewer.write().select(id)
    }

    pub fn settle(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<PokemonDetails, CatalogError>,
    ) -> Settlement {
        self.viewer.write().settle(ticket, outcome)
    }

    pub fn request_state(&self) -> RequestState {
        self.viewer.read().state().clone()
    }

    pub fn has_selection(&self) -> bool {
        self.viewer.read().has_selection()
    }
}
