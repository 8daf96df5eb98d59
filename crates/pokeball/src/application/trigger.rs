//! Picking the next Pokemon to catch

use crate::domain::PokemonId;
use crate::ports::outbound::PlatformPort;

/// Draw a fresh identifier in `[PokemonId::MIN, PokemonId::MAX]`.
///
/// Each throw is independent; the previous pick is not excluded.
pub fn throw_pokeball(platform: &dyn PlatformPort) -> PokemonId {
    let raw = platform.random_range(PokemonId::MIN as i32, PokemonId::MAX as i32);
    let id = PokemonId::clamped(i64::from(raw));
    if i64::from(id.get()) != i64::from(raw) {
        tracing::warn!(raw, clamped = id.get(), "Random provider returned out-of-range id");
    }
    tracing::debug!(pokemon_id = id.get(), "Pokeball thrown");
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::create_mock_platform;
    use proptest::prelude::*;

    #[test]
    fn uses_the_provider_value() {
        let (platform, random, _) = create_mock_platform();
        random.push(25);
        random.push(25);

        assert_eq!(throw_pokeball(&platform).get(), 25);
        // Repeats are allowed
        assert_eq!(throw_pokeball(&platform).get(), 25);
    }

    #[test]
    fn asks_for_the_inclusive_catalog_range() {
        let (platform, random, _) = create_mock_platform();

        throw_pokeball(&platform);

        assert_eq!(random.requested_ranges(), vec![(1, 100)]);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn real_provider_stays_in_range() {
        let platform = crate::infrastructure::platform::create_platform();
        for _ in 0..10_000 {
            let id = throw_pokeball(&platform).get();
            assert!((1..=100).contains(&id), "{id}");
        }
    }

    proptest! {
        #[test]
        fn any_provider_output_lands_in_range(raw in any::<i32>()) {
            let (platform, random, _) = create_mock_platform();
            random.push(raw);

            let id = throw_pokeball(&platform).get();

            prop_assert!((PokemonId::MIN..=PokemonId::MAX).contains(&id));
        }
    }
}
