//! The static sprite catalog: layer definitions, color palettes, and the
//! per-layer availability tables.

/// Layer identifiers and their static definitions.
pub mod layer;
/// Color palettes, skin tone ranges, and body shapes.
pub mod palette;
/// Index/variant availability tables and the availability resolver.
pub mod variants;

/// Character gender, used for exclusivity filtering and sprite filenames.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Gender {
    /// Male presentation.
    #[default]
    Male,
    /// Female presentation.
    Female,
}
