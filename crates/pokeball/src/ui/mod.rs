use crate::infrastructure::ViewerConfig;
use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Provided by the composition root (see `crates/pokeball/src/main.rs`).
    let config = use_context::<ViewerConfig>();

    // Signals must be created inside an active Dioxus runtime.
    use_context_provider(|| presentation::state::ViewerState::new(config.settle_policy));

    rsx! {
        presentation::views::RandomItemViewer {}
    }
}
