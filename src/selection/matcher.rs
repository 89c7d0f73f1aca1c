//! Tag-overlap matching of detected facial features against the sprite
//! catalog.
//!
//! Layers are resolved in a fixed priority order (face shape and hair first,
//! since they dominate perceived likeness) and earlier picks are never
//! revised. Scoring compares the analyzer's descriptive terms against each
//! sprite's metadata vocabulary; a handful of layers with small categorical
//! inputs (facial hair, glasses, age markers, blemishes) use fixed lookup
//! tables instead.

use std::collections::BTreeMap;

use crate::catalog::Gender;
use crate::catalog::layer::LayerId;
use crate::catalog::variants::{available_indices, matching_hair_back_indices};
use crate::selection::features::{AgeMarkers, DetectedFeatures};
use crate::selection::metadata::{SpriteMetadata, parse_sprite_filename};
use crate::selection::model::{CharacterSelection, ColorIndices, PartSelection, empty_parts};

/// Score granted for an exact term match.
pub const SCORE_EXACT: f64 = 2.0;
/// Score granted when the candidate term contains the detected term.
pub const SCORE_CANDIDATE_CONTAINS: f64 = 1.0;
/// Score granted when the detected term contains the candidate term.
pub const SCORE_DETECTED_CONTAINS: f64 = 0.5;
/// Score at which confidence saturates (roughly two exact term matches).
pub const FULL_CONFIDENCE_SCORE: f64 = 3.0;
/// Hair index used when the analyzer reports a bald subject.
pub const BALD_HAIR_INDEX: u32 = 4;

/// A matched selection plus its per-layer confidence map.
#[derive(Clone, Debug)]
pub struct MatchedCharacter {
    /// The assembled appearance.
    pub selection: CharacterSelection,
    /// Confidence in `[0, 1]` for each layer the matcher resolved.
    pub confidence: BTreeMap<LayerId, f64>,
}

#[derive(Clone, Copy, Debug)]
struct LayerMatch {
    part: PartSelection,
    confidence: f64,
}

/// Build a complete character from detected features.
///
/// Never fails: missing or unexpected feature fields degrade to defaults, and
/// layers without a usable match fall back to the first available catalog
/// entry with confidence 0.
pub fn match_features(
    detected: &DetectedFeatures,
    metadata: &SpriteMetadata,
) -> MatchedCharacter {
    let gender = map_gender(detected.gender_presentation.as_deref());
    let mut parts = empty_parts();
    let mut confidence = BTreeMap::new();

    // Face shape carries the likeness; resolve it first.
    let headshape = score_layer(
        LayerId::Headshape,
        &collect_terms(&[detected.face_shape.as_deref()], &detected.face_characteristics),
        Some(gender),
        metadata,
    );
    parts.insert(LayerId::Headshape, headshape.part);
    confidence.insert(LayerId::Headshape, headshape.confidence);

    resolve_hair(detected, gender, metadata, &mut parts, &mut confidence);

    let nose = score_layer(
        LayerId::Nose,
        &collect_terms(
            &[
                detected.nose.size.as_deref(),
                detected.nose.shape.as_deref(),
                detected.nose.bridge.as_deref(),
            ],
            &detected.nose.characteristics,
        ),
        Some(gender),
        metadata,
    );
    parts.insert(LayerId::Nose, nose.part);
    confidence.insert(LayerId::Nose, nose.confidence);

    let eyes = score_layer(
        LayerId::Eyes,
        &collect_terms(
            &[detected.eyes.shape.as_deref(), detected.eyes.size.as_deref()],
            &[],
        ),
        Some(gender),
        metadata,
    );
    parts.insert(LayerId::Eyes, eyes.part);
    confidence.insert(LayerId::Eyes, eyes.confidence);

    // Mouth sprites are not gendered.
    let mouth = score_layer(
        LayerId::Mouth,
        &collect_terms(
            &[
                detected.mouth.shape.as_deref(),
                detected.mouth.expression.as_deref(),
            ],
            &[],
        ),
        None,
        metadata,
    );
    parts.insert(LayerId::Mouth, mouth.part);
    confidence.insert(LayerId::Mouth, mouth.confidence);

    parts.insert(LayerId::Eyebrows, PartSelection::new(0, 0));

    if gender == Gender::Male {
        let beard = match_beard(detected.facial_hair.beard.as_deref());
        parts.insert(LayerId::Beard, beard.part);
        confidence.insert(LayerId::Beard, beard.confidence);

        let moustache = match_moustache(detected.facial_hair.mustache.as_deref());
        parts.insert(LayerId::Moustache, moustache.part);
        confidence.insert(LayerId::Moustache, moustache.confidence);

        // A moustache sprite occludes the mouth region.
        if moustache.part.is_present() {
            parts.insert(LayerId::Mouth, PartSelection::ABSENT);
        }
    }

    let glasses = match_glasses(detected.accessories.glasses.as_deref());
    parts.insert(LayerId::AccessoryFace, glasses.part);
    confidence.insert(LayerId::AccessoryFace, glasses.confidence);

    let upper = match_age_markers(&detected.age_markers, DetailPosition::Upper);
    parts.insert(LayerId::DetailUpper, upper.part);
    confidence.insert(LayerId::DetailUpper, upper.confidence);
    let lower = match_age_markers(&detected.age_markers, DetailPosition::Lower);
    parts.insert(LayerId::DetailLower, lower.part);
    confidence.insert(LayerId::DetailLower, lower.confidence);

    let blemish = match_blemish(&detected.accessories.other);
    parts.insert(LayerId::Blemish, blemish.part);
    confidence.insert(LayerId::Blemish, blemish.confidence);

    // Remaining layers take fixed defaults; the background stays empty.
    parts.insert(LayerId::Body, PartSelection::new(0, 0));
    parts.insert(LayerId::Ears, PartSelection::new(0, 0));
    parts.insert(LayerId::Clothes, PartSelection::new(0, 0));
    parts.insert(LayerId::ClothesBack, PartSelection::new(0, 0));

    MatchedCharacter {
        selection: CharacterSelection {
            gender,
            body_shape_index: 1,
            color_indices: ColorIndices {
                skin: match_skin_tone(detected.skin_tone.as_deref()),
                hair: match_hair_color(detected.hair.color.as_deref()),
                eye: match_eye_color(detected.eyes.color.as_deref()),
                accessory: 0,
            },
            parts,
        },
        confidence,
    }
}

/// Hair plus its paired HairBack layer; bald subjects take a fixed fallback.
fn resolve_hair(
    detected: &DetectedFeatures,
    gender: Gender,
    metadata: &SpriteMetadata,
    parts: &mut BTreeMap<LayerId, PartSelection>,
    confidence: &mut BTreeMap<LayerId, f64>,
) {
    let hair = &detected.hair;
    let bald = !hair.present || hair.length.as_deref() == Some("bald");
    if bald {
        parts.insert(LayerId::Hair, PartSelection::new(BALD_HAIR_INDEX, 0));
        parts.insert(LayerId::HairBack, PartSelection::new(BALD_HAIR_INDEX, 0));
        confidence.insert(LayerId::Hair, 1.0);
        return;
    }

    let matched = score_layer(
        LayerId::Hair,
        &collect_terms(
            &[hair.length.as_deref(), hair.style.as_deref()],
            &hair.characteristics,
        ),
        Some(gender),
        metadata,
    );
    parts.insert(LayerId::Hair, matched.part);
    confidence.insert(LayerId::Hair, matched.confidence);

    let hair_back = matched
        .part
        .coords()
        .and_then(|(index, _)| {
            matching_hair_back_indices(index, Some(gender))
                .first()
                .copied()
        })
        .map(|index| PartSelection::new(index, 0))
        .unwrap_or(PartSelection::ABSENT);
    parts.insert(LayerId::HairBack, hair_back);
}

/// Score every candidate sprite in a layer against the detected terms and
/// keep the best; ties keep the first entry in catalog order.
fn score_layer(
    layer: LayerId,
    detected_terms: &[String],
    gender: Option<Gender>,
    metadata: &SpriteMetadata,
) -> LayerMatch {
    let folder = layer.def().folder;
    let Some(category) = metadata.category(folder) else {
        tracing::debug!(layer = %layer, folder, "no sprite metadata; using first available");
        return fallback(layer, gender);
    };

    let gender_tag = gender.map(|g| match g {
        Gender::Male => "male",
        Gender::Female => "female",
    });

    let mut best_score = 0.0f64;
    let mut best: Option<(u32, u32)> = None;

    for (filename, entry) in category {
        if let Some(tag) = gender_tag
            && !entry.fits_gender(tag)
        {
            continue;
        }
        let Some(coords) = parse_sprite_filename(filename) else {
            continue;
        };

        let score = score_terms(detected_terms, &entry.terms());
        if score > best_score {
            best_score = score;
            best = Some(coords);
        }
    }

    match best {
        Some((index, variant)) if best_score >= 1.0 => LayerMatch {
            part: PartSelection::new(index, variant),
            confidence: confidence_from_score(best_score),
        },
        _ => fallback(layer, gender),
    }
}

/// Tag-overlap score between detected terms and a candidate's vocabulary.
///
/// Both term lists are expected lowercase. Exact equality beats
/// containment in either direction; specificity is rewarded without
/// requiring a controlled vocabulary upstream.
pub fn score_terms(detected_terms: &[String], candidate_terms: &[String]) -> f64 {
    let mut score = 0.0;
    for term in detected_terms {
        if term.is_empty() {
            continue;
        }
        for candidate in candidate_terms {
            if candidate.is_empty() {
                continue;
            }
            if term == candidate {
                score += SCORE_EXACT;
            } else if candidate.contains(term.as_str()) {
                score += SCORE_CANDIDATE_CONTAINS;
            } else if term.contains(candidate.as_str()) {
                score += SCORE_DETECTED_CONTAINS;
            }
        }
    }
    score
}

/// Normalize a raw score to a `[0, 1]` confidence.
pub fn confidence_from_score(score: f64) -> f64 {
    (score / FULL_CONFIDENCE_SCORE).min(1.0)
}

fn fallback(layer: LayerId, gender: Option<Gender>) -> LayerMatch {
    let index = available_indices(layer, gender).first().copied().unwrap_or(0);
    LayerMatch {
        part: PartSelection::new(index, 0),
        confidence: 0.0,
    }
}

fn collect_terms(singles: &[Option<&str>], extra: &[String]) -> Vec<String> {
    singles
        .iter()
        .flatten()
        .map(|s| s.to_lowercase())
        .chain(extra.iter().map(|s| s.to_lowercase()))
        .filter(|s| !s.is_empty())
        .collect()
}

fn map_gender(presentation: Option<&str>) -> Gender {
    match presentation {
        Some("Female") => Gender::Female,
        _ => Gender::Male,
    }
}

fn match_skin_tone(tone: Option<&str>) -> u32 {
    match tone.map(|t| t.to_lowercase()).as_deref() {
        Some("very light") => 0,
        Some("light") => 1,
        Some("light medium") => 2,
        Some("medium") => 3,
        Some("olive") => 4,
        Some("brown") => 5,
        Some("dark brown") => 6,
        _ => 2,
    }
}

fn match_hair_color(color: Option<&str>) -> u32 {
    match color.map(|c| c.to_lowercase()).as_deref() {
        Some("platinum blonde") | Some("white") => 0,
        Some("blonde") => 1,
        Some("light brown") => 2,
        Some("brown") => 3,
        Some("dark brown") | Some("gray") => 4,
        Some("black") => 5,
        Some("auburn") => 6,
        Some("red") => 7,
        _ => 3,
    }
}

fn match_eye_color(color: Option<&str>) -> u32 {
    match color.map(|c| c.to_lowercase()).as_deref() {
        Some("blue") => 0,
        Some("green") => 1,
        Some("brown") => 2,
        Some("hazel") => 3,
        Some("gray") => 4,
        Some("amber") => 5,
        _ => 2,
    }
}

fn match_beard(beard: Option<&str>) -> LayerMatch {
    match beard {
        None | Some("none") => LayerMatch {
            part: PartSelection::ABSENT,
            confidence: 1.0,
        },
        Some(kind) => {
            // Stubble has no sprite; it reads better as clean-shaven than as
            // a full beard.
            let part = match kind {
                "goatee" => PartSelection::new(20, 0),
                "full" => PartSelection::new(0, 0),
                _ => PartSelection::ABSENT,
            };
            LayerMatch {
                part,
                confidence: 0.8,
            }
        }
    }
}

fn match_moustache(moustache: Option<&str>) -> LayerMatch {
    match moustache {
        None | Some("none") => LayerMatch {
            part: PartSelection::ABSENT,
            confidence: 1.0,
        },
        Some(kind) => {
            let part = match kind {
                "thin" => PartSelection::new(0, 1),
                "handlebar" => PartSelection::new(1, 0),
                "chevron" => PartSelection::new(2, 0),
                "walrus" => PartSelection::new(3, 0),
                _ => PartSelection::new(0, 0),
            };
            LayerMatch {
                part,
                confidence: 0.8,
            }
        }
    }
}

fn match_glasses(glasses: Option<&str>) -> LayerMatch {
    match glasses {
        None | Some("none") => LayerMatch {
            part: PartSelection::ABSENT,
            confidence: 1.0,
        },
        Some(kind) => {
            let part = match kind {
                "monocle" => PartSelection::new(1, 0),
                "round" => PartSelection::new(2, 0),
                "rectangular" => PartSelection::new(2, 3),
                _ => PartSelection::new(2, 0),
            };
            LayerMatch {
                part,
                confidence: 0.9,
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DetailPosition {
    Upper,
    Lower,
}

fn match_age_markers(age: &AgeMarkers, position: DetailPosition) -> LayerMatch {
    let absent = LayerMatch {
        part: PartSelection::ABSENT,
        confidence: 1.0,
    };
    if age.apparent_age.as_deref() == Some("young") {
        return absent;
    }
    let (index, confidence) = match (age.wrinkles.as_deref(), position) {
        (Some("prominent"), DetailPosition::Upper) => (0, 0.7),
        (Some("moderate"), DetailPosition::Upper) => (1, 0.6),
        (Some("prominent"), DetailPosition::Lower) => (14, 0.7),
        (Some("moderate"), DetailPosition::Lower) => (10, 0.6),
        _ => return absent,
    };
    LayerMatch {
        part: PartSelection::new(index, 0),
        confidence,
    }
}

fn match_blemish(other: &[String]) -> LayerMatch {
    let has_scar = other.iter().any(|item| item.to_lowercase().contains("scar"));
    if has_scar {
        LayerMatch {
            part: PartSelection::new(0, 0),
            confidence: 0.8,
        }
    } else {
        LayerMatch {
            part: PartSelection::ABSENT,
            confidence: 1.0,
        }
    }
}
