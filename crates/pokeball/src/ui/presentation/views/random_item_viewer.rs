//! The single screen of the app: throw a Pokeball, see what was caught

use dioxus::prelude::*;

use crate::application::throw_pokeball;
use crate::ports::outbound::PlatformPort;
use crate::presentation::components::{RequestPanel, TriggerButton};
use crate::presentation::services::Services;
use crate::presentation::state::ViewerState;
use crate::use_platform;

pub const PAGE_TITLE: &str = "Catch a random Pokemon!";

#[component]
pub fn RandomItemViewer() -> Element {
    let services = use_context::<Services>();
    let platform = use_platform();
    let viewer = use_context::<ViewerState>();

    use_hook({
        let platform = platform.clone();
        move || platform.set_page_title(PAGE_TITLE)
    });

    let on_throw = move |_: MouseEvent| {
        throw_and_fetch(platform.as_ref(), &services, viewer);
    };

    let state = viewer.request_state();
    let has_selection = viewer.has_selection();

    rsx! {
        main { class: "App",
            h1 { "{PAGE_TITLE}" }
            TriggerButton { has_selection, onclick: on_throw }
            RequestPanel { state }
        }
    }
}

/// Draw an id, go `Pending`, and spawn the lookup on the current scope.
///
/// Fire-and-forget: the lookup is not cancelled when another throw
/// supersedes it. The viewer's settle policy decides what a late result does.
pub fn throw_and_fetch(platform: &dyn PlatformPort, services: &Services, mut viewer: ViewerState) {
    let id = throw_pokeball(platform);
    let ticket = viewer.select(id);
    let pokemon = services.pokemon.clone();

    spawn(async move {
        let outcome = pokemon.fetch_details(id).await;
        viewer.settle(ticket, outcome);
    });
}
