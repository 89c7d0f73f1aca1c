//! Crewgen renders layered 2D character portraits.
//!
//! A character is a selection of sprites, one per layer of a fixed 20-layer
//! stack, plus palette picks for skin, hair, eye, and accessory colors.
//! Selections come from one of two producers:
//!
//! - [`selection::random::synthesize`] builds a constrained-random character
//!   from a seedable RNG
//! - [`selection::matcher::match_features`] builds the closest character to a
//!   structured description of a photographed face
//!
//! Either selection renders through [`render::portrait::render_portrait`],
//! which composites tinted sprites back to front, and groups of portraits
//! assemble into a printable card with
//! [`render::postcard::assemble_postcard`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Static sprite catalog: layers, palettes, and variant tables.
pub mod catalog;
/// Shared primitives: colors and the error taxonomy.
pub mod foundation;
/// Raster rendering of selections.
pub mod render;
/// The appearance model and its producers.
pub mod selection;

pub use crate::catalog::Gender;
pub use crate::catalog::layer::{ColorRole, LayerId};
pub use crate::catalog::palette::{Ethnicity, SkinToneRange};
pub use crate::foundation::color::Rgb8;
pub use crate::foundation::error::{CrewgenError, CrewgenResult};
pub use crate::render::portrait::{PORTRAIT_SIZE, render_portrait};
pub use crate::render::postcard::{TemplateVariant, assemble_postcard};
pub use crate::render::sprites::{SpriteLibrary, SpriteSource};
pub use crate::selection::features::DetectedFeatures;
pub use crate::selection::matcher::{MatchedCharacter, match_features};
pub use crate::selection::metadata::SpriteMetadata;
pub use crate::selection::model::{CharacterSelection, ColorIndices, PartSelection};
pub use crate::selection::random::{synthesize, synthesize_seeded};
