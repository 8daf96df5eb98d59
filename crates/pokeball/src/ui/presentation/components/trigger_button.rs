//! Pokeball button

use dioxus::prelude::*;

pub const FIRST_THROW_LABEL: &str = "Throw first Pokeball";
pub const NEXT_THROW_LABEL: &str = "Use another Pokeball";

/// Label depends only on whether a Pokeball has ever been thrown.
pub fn trigger_label(has_selection: bool) -> &'static str {
    if has_selection {
        NEXT_THROW_LABEL
    } else {
        FIRST_THROW_LABEL
    }
}

#[component]
pub fn TriggerButton(has_selection: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let label = trigger_label(has_selection);

    rsx! {
        button {
            r#type: "button",
            class: "trigger-button",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_before_and_after_first_throw() {
        assert_eq!(trigger_label(false), "Throw first Pokeball");
        assert_eq!(trigger_label(true), "Use another Pokeball");
    }
}
