//! Caught Pokemon summary

use dioxus::prelude::*;

use crate::domain::PokemonDetails;

/// Name heading plus base experience, height and weight.
///
/// Absent fields render as empty text rather than a placeholder.
#[component]
pub fn PokemonCard(details: PokemonDetails) -> Element {
    let name = details.name.clone().unwrap_or_default();
    let base_experience = display_optional(details.base_experience);
    let height = display_optional(details.height);
    let weight = display_optional(details.weight);

    rsx! {
        div { class: "pokemon",
            h2 { "{name}" }
            ul { class: "pokemon__details-list",
                li { "Base XP: {base_experience}" }
                li { "Height: {height}" }
                li { "Weight: {weight}" }
            }
        }
    }
}

fn display_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_name_and_three_attributes() {
        let details = PokemonDetails {
            name: Some("bulbasaur".into()),
            base_experience: Some(64.0),
            height: Some(7.0),
            weight: Some(69.0),
            ..PokemonDetails::default()
        };

        let html = dioxus_ssr::render_element(rsx! { PokemonCard { details } });

        assert!(html.contains("bulbasaur"), "{html}");
        assert!(html.contains("Base XP: 64"), "{html}");
        assert!(html.contains("Height: 7"), "{html}");
        assert!(html.contains("Weight: 69"), "{html}");
    }

    #[test]
    fn absent_fields_render_empty() {
        let html = dioxus_ssr::render_element(rsx! {
            PokemonCard { details: PokemonDetails::named("pikachu") }
        });

        assert!(html.contains("pikachu"), "{html}");
        assert!(html.contains("<li>Base XP: </li>"), "{html}");
        assert!(html.contains("<li>Height: </li>"), "{html}");
        assert!(!html.contains("None"), "{html}");
    }

    #[test]
    fn display_optional_formats_present_values() {
        assert_eq!(display_optional(Some(12.0)), "12");
        assert_eq!(display_optional(Some(0.5)), "0.5");
        assert_eq!(display_optional::<f64>(None), "");
    }
}
