//! Result area of the viewer
//!
//! Pure mapping from `RequestState` to markup; holds no state of its own.

use dioxus::prelude::*;

use crate::domain::RequestState;

use super::PokemonCard;

#[component]
pub fn RequestPanel(state: RequestState) -> Element {
    match &state {
        RequestState::NotStarted => {
            let prompt = state.prompt().unwrap_or_default();
            rsx! {
                p { class: "prompt", "{prompt}" }
            }
        }
        RequestState::Pending => rsx! {
            LoadingIndicator {}
        },
        RequestState::Failed(message) => rsx! {
            pre { class: "error", "{message}" }
        },
        RequestState::Succeeded(details) => rsx! {
            PokemonCard { details: details.clone() }
        },
    }
}

/// Plain text stand-in for a spinner
#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div { class: "loading-indicator", role: "status", "Loading..." }
    }
}
