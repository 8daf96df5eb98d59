//! Catalog identifiers and the decoded Pokemon record

use std::fmt;

use thiserror::Error;

/// Identifier of a catalog entry that can be caught.
///
/// Only the first hundred entries are ever requested, so the type rejects
/// anything outside `[PokemonId::MIN, PokemonId::MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PokemonId(u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pokemon id {0} is outside {min}..={max}", min = PokemonId::MIN, max = PokemonId::MAX)]
pub struct InvalidPokemonId(pub u32);

impl PokemonId {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    pub fn new(value: u32) -> Result<Self, InvalidPokemonId> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidPokemonId(value))
        }
    }

    /// Saturate an arbitrary integer into the valid range.
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        // Lossless: the clamp above bounds `value` to `MIN..=MAX`.
        Self(value as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PokemonId {
    type Error = InvalidPokemonId;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Partial Pokemon record as returned by the catalog.
///
/// The remote schema is not guaranteed to carry every field, so each one is
/// independently optional. Numeric fields accept any finite JSON number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonDetails {
    pub id: Option<f64>,
    pub name: Option<String>,
    pub base_experience: Option<f64>,
    /// Decimetres
    pub height: Option<f64>,
    pub is_default: Option<bool>,
    /// Sort order. The catalog uses `-1` for some alternate forms.
    pub order: Option<f64>,
    /// Hectograms
    pub weight: Option<f64>,
}

impl PokemonDetails {
    /// Record with only a name, mostly useful for fixtures
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
