//! The character appearance model shared by every selection producer.

use std::collections::BTreeMap;

use crate::catalog::Gender;
use crate::catalog::layer::LayerId;

/// One layer's chosen sprite, or its absence.
///
/// `index` picks the design family, `variant` a near-duplicate rendering
/// within it. Both are `-1` together for an absent layer; any present
/// selection has both non-negative. The two fields are never mixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PartSelection {
    /// Design family within the layer, or `-1`.
    pub index: i32,
    /// Rendering variant within the family, or `-1`.
    pub variant: i32,
}

impl PartSelection {
    /// The absent selection.
    pub const ABSENT: PartSelection = PartSelection {
        index: -1,
        variant: -1,
    };

    /// A present selection from catalog coordinates.
    pub const fn new(index: u32, variant: u32) -> Self {
        Self {
            index: index as i32,
            variant: variant as i32,
        }
    }

    /// Whether this layer is present.
    pub const fn is_present(self) -> bool {
        self.index >= 0 && self.variant >= 0
    }

    /// Catalog coordinates when present.
    pub fn coords(self) -> Option<(u32, u32)> {
        if self.is_present() {
            Some((self.index as u32, self.variant as u32))
        } else {
            None
        }
    }
}

impl Default for PartSelection {
    fn default() -> Self {
        Self::ABSENT
    }
}

/// Selected palette indices, one per color role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorIndices {
    /// Index into the skin palette.
    #[serde(rename = "Skin")]
    pub skin: u32,
    /// Index into the hair palette.
    #[serde(rename = "Hair")]
    pub hair: u32,
    /// Index into the eye palette.
    #[serde(rename = "Eye")]
    pub eye: u32,
    /// Index into the accessory palette.
    #[serde(rename = "Accessory")]
    pub accessory: u32,
}

/// A complete, immutable character appearance.
///
/// Constructed atomically by the random synthesizer or the feature matcher
/// and consumed by the compositor; nothing mutates it afterwards and nothing
/// persists it. The part mapping is total: every [`LayerId`] has an entry,
/// absent or present.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterSelection {
    /// Character gender.
    pub gender: Gender,
    /// Body-shape index (game metadata; rendering clamps to sprites on disk).
    pub body_shape_index: u32,
    /// Palette picks for the four color roles.
    pub color_indices: ColorIndices,
    /// One selection per layer.
    pub parts: BTreeMap<LayerId, PartSelection>,
}

impl CharacterSelection {
    /// Selection for a layer; defaults to absent for robustness against
    /// hand-edited documents with missing entries.
    pub fn part(&self, layer: LayerId) -> PartSelection {
        self.parts.get(&layer).copied().unwrap_or(PartSelection::ABSENT)
    }

    /// Whether a layer is present in this selection.
    pub fn has(&self, layer: LayerId) -> bool {
        self.part(layer).is_present()
    }
}

/// A parts map with every layer absent.
pub fn empty_parts() -> BTreeMap<LayerId, PartSelection> {
    LayerId::ALL
        .into_iter()
        .map(|layer| (layer, PartSelection::ABSENT))
        .collect()
}

/// The fixed starter character used before any synthesis or matching.
pub fn default_character(gender: Gender) -> CharacterSelection {
    let mut parts = empty_parts();
    for (layer, index, variant) in [
        (LayerId::Body, 0, 0),
        (LayerId::Headshape, 0, 0),
        (LayerId::Ears, 0, 0),
        (LayerId::Eyes, 0, 0),
        (LayerId::Nose, 0, 0),
        (LayerId::Mouth, 0, 0),
        (LayerId::Eyebrows, 0, 0),
        (LayerId::Hair, 0, 0),
        (LayerId::HairBack, 4, 0),
        (LayerId::Clothes, 0, 0),
        (LayerId::ClothesBack, 0, 0),
    ] {
        parts.insert(layer, PartSelection::new(index, variant));
    }

    CharacterSelection {
        gender,
        body_shape_index: 1,
        color_indices: ColorIndices {
            skin: 2,
            hair: 3,
            eye: 2,
            accessory: 1,
        },
        parts,
    }
}
