//! Per-layer index/variant availability tables and the availability resolver.
//!
//! The tables describe which sprite files exist on disk, so the selection
//! algorithms and the compositor must agree on them bit for bit. Several
//! layers share one variant family (all accessory layers draw from the same
//! folder; both detail layers share the detail family).

use crate::catalog::Gender;
use crate::catalog::layer::LayerId;

/// Variants available for one index.
///
/// Source data mixed "N sequential variants" and explicit lists; that is
/// resolved into one tagged representation here, at table-definition time.
#[derive(Clone, Copy, Debug)]
pub enum VariantSet {
    /// Variants `0..n`.
    Count(u32),
    /// Explicit, possibly non-contiguous variant numbers.
    List(&'static [u32]),
}

impl VariantSet {
    fn collect(self) -> Vec<u32> {
        match self {
            VariantSet::Count(n) => (0..n).collect(),
            VariantSet::List(vs) => vs.to_vec(),
        }
    }
}

/// Availability data for one variant family.
#[derive(Clone, Copy, Debug)]
pub struct VariantEntry {
    /// Index -> variant set, ascending by index.
    pub variants: &'static [(u32, VariantSet)],
    /// Indices that only exist as female sprites.
    pub female_only_indices: &'static [u32],
    /// Indices that have a separate female sprite next to the base one.
    pub gender_specific: &'static [u32],
    /// Per-index variants that only exist as female sprites.
    pub female_only_variants: &'static [(u32, &'static [u32])],
    /// Female filename suffix; `None` means the default `_female`.
    pub female_suffix: Option<&'static str>,
}

const NO_INDICES: &[u32] = &[];
const NO_VARIANTS: &[(u32, &[u32])] = &[];

const ACCESSORY: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(4)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(4)),
        (3, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const BEARD: VariantEntry = VariantEntry {
    variants: &[(0, VariantSet::Count(3)), (20, VariantSet::Count(1))],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const BLEMISH: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(1)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const BODY: VariantEntry = VariantEntry {
    variants: &[(0, VariantSet::Count(1)), (1, VariantSet::Count(1))],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const CLOTHES: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(2)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(1)),
        (6, VariantSet::Count(1)),
        (7, VariantSet::Count(1)),
        (8, VariantSet::Count(1)),
        (9, VariantSet::Count(1)),
        (10, VariantSet::Count(1)),
        (11, VariantSet::Count(1)),
        (12, VariantSet::Count(1)),
    ],
    female_only_indices: &[7, 8, 9, 10, 11, 12],
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    // Clothes sprites use `_F` rather than the usual `_female`.
    female_suffix: Some("_F"),
};

const CLOTHES_BACK: VariantEntry = VariantEntry {
    variants: &[(0, VariantSet::Count(1)), (14, VariantSet::Count(1))],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const DETAIL: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(1)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(1)),
        (6, VariantSet::Count(1)),
        (7, VariantSet::Count(1)),
        (8, VariantSet::Count(1)),
        (9, VariantSet::Count(1)),
        (10, VariantSet::Count(1)),
        (11, VariantSet::Count(1)),
        (12, VariantSet::Count(1)),
        (13, VariantSet::Count(1)),
        (14, VariantSet::Count(1)),
        (15, VariantSet::Count(1)),
        (16, VariantSet::Count(1)),
        (17, VariantSet::Count(1)),
        (18, VariantSet::Count(1)),
        (19, VariantSet::Count(1)),
        (20, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const EARS: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(1)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(1)),
        (6, VariantSet::Count(1)),
        (7, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const EYEBROWS: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(2)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(2)),
        (3, VariantSet::Count(2)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(3)),
        (6, VariantSet::Count(2)),
        (7, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const EYES: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(2)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(6)),
        (4, VariantSet::Count(2)),
        (5, VariantSet::Count(1)),
        (6, VariantSet::Count(1)),
        (7, VariantSet::Count(2)),
        (8, VariantSet::Count(4)),
        (9, VariantSet::Count(2)),
        (10, VariantSet::Count(1)),
        (11, VariantSet::Count(1)),
        (12, VariantSet::Count(2)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: &[9],
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const HAIR: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(3)),
        (1, VariantSet::Count(2)),
        (2, VariantSet::Count(3)),
        (3, VariantSet::Count(3)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(2)),
        (6, VariantSet::Count(3)),
        (7, VariantSet::Count(4)),
        (8, VariantSet::Count(2)),
        (9, VariantSet::Count(4)),
        (10, VariantSet::Count(2)),
        (11, VariantSet::Count(2)),
        (12, VariantSet::Count(1)),
        (13, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: &[7, 8, 9, 10],
    female_only_variants: &[(7, &[2, 3]), (9, &[2, 3])],
    female_suffix: None,
};

const HAIR_BACK: VariantEntry = VariantEntry {
    variants: &[
        (4, VariantSet::Count(1)),
        // Variant 2 is missing on disk for index 7.
        (7, VariantSet::List(&[0, 1, 3])),
        (8, VariantSet::Count(2)),
        (9, VariantSet::Count(6)),
        (10, VariantSet::Count(2)),
        (11, VariantSet::Count(2)),
        (12, VariantSet::Count(2)),
        (13, VariantSet::Count(1)),
    ],
    female_only_indices: &[7],
    gender_specific: &[8, 9, 10],
    female_only_variants: &[(9, &[4, 5])],
    female_suffix: None,
};

const HEADSHAPE: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(2)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(1)),
        (6, VariantSet::Count(1)),
        (7, VariantSet::Count(2)),
        (8, VariantSet::Count(3)),
        (9, VariantSet::Count(2)),
        (10, VariantSet::Count(1)),
        (11, VariantSet::Count(1)),
        (12, VariantSet::Count(1)),
        (13, VariantSet::Count(1)),
        (14, VariantSet::Count(1)),
        (15, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: &[8, 9],
    female_only_variants: &[(9, &[1])],
    female_suffix: None,
};

const MOUSTACHE: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(2)),
        (1, VariantSet::Count(2)),
        (2, VariantSet::Count(2)),
        (3, VariantSet::Count(3)),
        (4, VariantSet::Count(3)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const MOUTH: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(1)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
        (4, VariantSet::Count(1)),
        (5, VariantSet::Count(1)),
        (6, VariantSet::Count(1)),
        (7, VariantSet::Count(1)),
        (8, VariantSet::Count(1)),
        (9, VariantSet::Count(1)),
        (10, VariantSet::Count(1)),
        (11, VariantSet::Count(1)),
        (12, VariantSet::Count(1)),
        (13, VariantSet::Count(1)),
        (14, VariantSet::Count(1)),
        (15, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const NOSE: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(3)),
        (1, VariantSet::Count(2)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
        (4, VariantSet::Count(2)),
        (5, VariantSet::Count(2)),
        (6, VariantSet::Count(2)),
        (7, VariantSet::Count(2)),
        (8, VariantSet::Count(2)),
        (9, VariantSet::Count(2)),
        (10, VariantSet::Count(1)),
        (11, VariantSet::Count(1)),
        (12, VariantSet::Count(2)),
        (20, VariantSet::Count(1)),
        (21, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

const BACKGROUND: VariantEntry = VariantEntry {
    variants: &[
        (0, VariantSet::Count(1)),
        (1, VariantSet::Count(1)),
        (2, VariantSet::Count(1)),
        (3, VariantSet::Count(1)),
    ],
    female_only_indices: NO_INDICES,
    gender_specific: NO_INDICES,
    female_only_variants: NO_VARIANTS,
    female_suffix: None,
};

/// Clothes index -> required ClothesBack index.
pub const CLOTHES_BACK_MAP: &[(u32, u32)] = &[(0, 0), (1, 14)];

/// Availability entry for a layer's variant family.
pub const fn entry(layer: LayerId) -> &'static VariantEntry {
    match layer {
        LayerId::AccessoryFront | LayerId::AccessoryFace | LayerId::AccessoryHead => &ACCESSORY,
        LayerId::Beard => &BEARD,
        LayerId::Blemish => &BLEMISH,
        LayerId::Body => &BODY,
        LayerId::Clothes => &CLOTHES,
        LayerId::ClothesBack => &CLOTHES_BACK,
        LayerId::DetailUpper | LayerId::DetailLower => &DETAIL,
        LayerId::Ears => &EARS,
        LayerId::Eyebrows => &EYEBROWS,
        LayerId::Eyes => &EYES,
        LayerId::Hair => &HAIR,
        LayerId::HairBack => &HAIR_BACK,
        LayerId::Headshape => &HEADSHAPE,
        LayerId::Moustache => &MOUSTACHE,
        LayerId::Mouth => &MOUTH,
        LayerId::Nose => &NOSE,
        LayerId::Background => &BACKGROUND,
    }
}

/// Ascending indices available for `layer`, filtered for `gender`.
///
/// Male characters never see female-only indices. Passing `None` applies no
/// gender filter.
pub fn available_indices(layer: LayerId, gender: Option<Gender>) -> Vec<u32> {
    let entry = entry(layer);
    entry
        .variants
        .iter()
        .map(|(idx, _)| *idx)
        .filter(|idx| {
            gender != Some(Gender::Male) || !entry.female_only_indices.contains(idx)
        })
        .collect()
}

/// Ascending variants available for `(layer, index)`, filtered for `gender`.
///
/// Returns an empty set when the index is unknown to the catalog.
pub fn available_variants(layer: LayerId, index: u32, gender: Option<Gender>) -> Vec<u32> {
    let entry = entry(layer);
    let Some((_, set)) = entry.variants.iter().find(|(idx, _)| *idx == index) else {
        return Vec::new();
    };

    let mut variants = set.collect();
    if gender == Some(Gender::Male)
        && let Some((_, female_only)) = entry
            .female_only_variants
            .iter()
            .find(|(idx, _)| *idx == index)
    {
        variants.retain(|v| !female_only.contains(v));
    }
    variants
}

/// HairBack indices matching a chosen Hair index.
///
/// HairBack sprites pair with Hair sprites through their identification
/// number, so the result has at most one element.
pub fn matching_hair_back_indices(hair_index: u32, gender: Option<Gender>) -> Vec<u32> {
    available_indices(LayerId::HairBack, gender)
        .into_iter()
        .filter(|idx| *idx == hair_index)
        .collect()
}

/// Required ClothesBack index for a Clothes index, when a mapping exists.
pub fn clothes_back_for(clothes_index: u32) -> Option<u32> {
    CLOTHES_BACK_MAP
        .iter()
        .find(|(from, _)| *from == clothes_index)
        .map(|(_, to)| *to)
}

/// Whether `(index, variant)` resolves to a sprite for `gender`.
pub fn is_valid_variant(layer: LayerId, index: u32, variant: u32, gender: Gender) -> bool {
    available_variants(layer, index, Some(gender)).contains(&variant)
}

/// Whether an index only exists as a female sprite.
pub fn is_female_only_index(layer: LayerId, index: u32) -> bool {
    entry(layer).female_only_indices.contains(&index)
}

/// Whether an index carries a separate female sprite file.
pub fn is_gender_specific(layer: LayerId, index: u32) -> bool {
    entry(layer).gender_specific.contains(&index)
}

/// Female filename suffix for this layer's family.
pub fn female_suffix(layer: LayerId) -> &'static str {
    entry(layer).female_suffix.unwrap_or("_female")
}
