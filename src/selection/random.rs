//! Constrained-random character synthesis.
//!
//! All sampling is driven by a caller-provided [`rand::Rng`], so a seeded
//! generator reproduces the same character byte for byte. Any draw from an
//! empty catalog set degrades to an absent part; sparse catalogs are
//! expected and never an error.

use rand::Rng;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Gender;
use crate::catalog::layer::LayerId;
use crate::catalog::palette::{
    ACCESSORY_PALETTE, BODY_SHAPES, EYE_PALETTE, HAIR_PALETTE, SKIN_LIGHT_WEIGHT, SKIN_PALETTE,
    SKIN_SPLIT, SkinToneRange,
};
use crate::catalog::variants::{
    available_indices, available_variants, clothes_back_for, matching_hair_back_indices,
};
use crate::selection::model::{CharacterSelection, ColorIndices, PartSelection, empty_parts};

/// Inclusion probability for optional layers without specific tuning.
pub const DEFAULT_PRESENCE: f64 = 0.7;

/// Probability that an optional layer is included in a random character.
///
/// Every optional layer currently shares [`DEFAULT_PRESENCE`]; the per-layer
/// hook is what synthesis consults, so individual layers can be tuned without
/// touching the algorithm.
pub fn inclusion_probability(_layer: LayerId) -> f64 {
    DEFAULT_PRESENCE
}

/// Layers resolved after the first pass because they depend on another
/// layer's pick (or on the moustache roll, for the mouth).
const DEPENDENT_LAYERS: [LayerId; 3] = [LayerId::Mouth, LayerId::ClothesBack, LayerId::HairBack];

/// Build a complete random character for `gender`, with skin tones
/// constrained to `skin_range`.
pub fn synthesize(
    gender: Gender,
    skin_range: SkinToneRange,
    rng: &mut impl Rng,
) -> CharacterSelection {
    let color_indices = ColorIndices {
        skin: sample_skin_tone(skin_range, rng),
        hair: rng.random_range(0..HAIR_PALETTE.len() as u32),
        eye: rng.random_range(0..EYE_PALETTE.len() as u32),
        accessory: rng.random_range(0..ACCESSORY_PALETTE.len() as u32),
    };
    let body_shape_index = rng.random_range(0..BODY_SHAPES.len() as u32);

    let mut parts = empty_parts();

    for layer in LayerId::ALL {
        if DEPENDENT_LAYERS.contains(&layer) {
            continue;
        }

        // Facial hair never appears on female characters.
        if gender == Gender::Female
            && matches!(layer, LayerId::Beard | LayerId::Moustache)
        {
            continue;
        }

        let def = layer.def();
        if !def.optional || rng.random::<f64>() < inclusion_probability(layer) {
            parts.insert(layer, draw_part(layer, gender, rng));
        }
    }

    resolve_clothes_back(&mut parts, gender, rng);
    resolve_mouth(&mut parts, gender, rng);
    resolve_hair_back(&mut parts, gender, rng);

    CharacterSelection {
        gender,
        body_shape_index,
        color_indices,
        parts,
    }
}

/// Seeded convenience wrapper around [`synthesize`].
pub fn synthesize_seeded(
    gender: Gender,
    skin_range: SkinToneRange,
    seed: u64,
) -> CharacterSelection {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    synthesize(gender, skin_range, &mut rng)
}

/// Draw a skin tone index within `range`.
///
/// Ranges entirely on one side of [`SKIN_SPLIT`] are uniform. A straddling
/// range draws the light sub-range with [`SKIN_LIGHT_WEIGHT`] probability and
/// the dark sub-range otherwise. Keep the three arms separate even though the
/// first two bodies agree; the straddling branch is the only weighted one and
/// the asymmetry is awaiting product confirmation.
fn sample_skin_tone(range: SkinToneRange, rng: &mut impl Rng) -> u32 {
    let top = SKIN_PALETTE.len() as u32 - 1;
    let lo = range.min.min(top);
    let hi = range.max.min(top);
    if lo >= hi {
        return hi;
    }

    if hi <= SKIN_SPLIT {
        rng.random_range(lo..=hi)
    } else if lo > SKIN_SPLIT {
        rng.random_range(lo..=hi)
    } else if rng.random::<f64>() < SKIN_LIGHT_WEIGHT {
        rng.random_range(lo..=SKIN_SPLIT)
    } else {
        rng.random_range(SKIN_SPLIT + 1..=hi)
    }
}

/// Uniform index + variant draw for one layer; absent on any empty set.
fn draw_part(layer: LayerId, gender: Gender, rng: &mut impl Rng) -> PartSelection {
    let indices = available_indices(layer, Some(gender));
    let Some(&index) = indices.choose(rng) else {
        return PartSelection::ABSENT;
    };
    let variants = available_variants(layer, index, Some(gender));
    let Some(&variant) = variants.choose(rng) else {
        return PartSelection::ABSENT;
    };
    PartSelection::new(index, variant)
}

/// ClothesBack follows the Clothes pick through the dependency map, falling
/// back to a random available index when no mapping exists.
fn resolve_clothes_back(
    parts: &mut std::collections::BTreeMap<LayerId, PartSelection>,
    gender: Gender,
    rng: &mut impl Rng,
) {
    let Some((clothes_index, _)) = parts
        .get(&LayerId::Clothes)
        .copied()
        .unwrap_or_default()
        .coords()
    else {
        parts.insert(LayerId::ClothesBack, PartSelection::ABSENT);
        return;
    };

    let selection = match clothes_back_for(clothes_index) {
        Some(back_index) => PartSelection::new(back_index, 0),
        None => {
            let indices = available_indices(LayerId::ClothesBack, Some(gender));
            match indices.choose(rng) {
                Some(&index) => PartSelection::new(index, 0),
                None => PartSelection::ABSENT,
            }
        }
    };
    parts.insert(LayerId::ClothesBack, selection);
}

/// Mouth is only eligible when no moustache was drawn, and then still rolls
/// its inclusion probability.
fn resolve_mouth(
    parts: &mut std::collections::BTreeMap<LayerId, PartSelection>,
    gender: Gender,
    rng: &mut impl Rng,
) {
    let has_moustache = parts
        .get(&LayerId::Moustache)
        .copied()
        .unwrap_or_default()
        .is_present();

    let selection = if !has_moustache
        && rng.random::<f64>() < inclusion_probability(LayerId::Mouth)
    {
        draw_part(LayerId::Mouth, gender, rng)
    } else {
        PartSelection::ABSENT
    };
    parts.insert(LayerId::Mouth, selection);
}

/// HairBack pairs with the Hair pick by identification number and is only
/// sometimes worn even when a pair exists.
fn resolve_hair_back(
    parts: &mut std::collections::BTreeMap<LayerId, PartSelection>,
    gender: Gender,
    rng: &mut impl Rng,
) {
    let Some((hair_index, _)) = parts
        .get(&LayerId::Hair)
        .copied()
        .unwrap_or_default()
        .coords()
    else {
        parts.insert(LayerId::HairBack, PartSelection::ABSENT);
        return;
    };

    let matching = matching_hair_back_indices(hair_index, Some(gender));
    let selection = if !matching.is_empty()
        && rng.random::<f64>() < inclusion_probability(LayerId::HairBack)
    {
        match matching.choose(rng) {
            Some(&index) => {
                let variants = available_variants(LayerId::HairBack, index, Some(gender));
                match variants.choose(rng) {
                    Some(&variant) => PartSelection::new(index, variant),
                    None => PartSelection::ABSENT,
                }
            }
            None => PartSelection::ABSENT,
        }
    } else {
        PartSelection::ABSENT
    };
    parts.insert(LayerId::HairBack, selection);
}
