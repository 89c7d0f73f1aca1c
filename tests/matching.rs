use crewgen::catalog::layer::LayerId;
use crewgen::{DetectedFeatures, Gender, SpriteMetadata, match_features};

fn metadata_fixture() -> SpriteMetadata {
    SpriteMetadata::from_json_str(
        r#"{
        "categories": {
            "13_Headshape_Skin": {
                "headshape_00_00.png": { "tags": ["oval", "soft"], "gender_fit": "both" },
                "headshape_03_00.png": { "tags": ["angular", "defined jaw"], "gender_fit": "both" },
                "headshape_09_01.png": { "tags": ["angular"], "gender_fit": "female" }
            },
            "10_Hair_Hair": {
                "hair_01_00.png": { "tags": ["short", "neat"], "gender_fit": "both" },
                "hair_06_02.png": { "tags": ["medium", "wavy"], "gender_fit": "both" }
            },
            "2_Nose_Skin": {
                "nose_02_00.png": { "tags": ["straight", "medium"], "gender_fit": "both" }
            },
            "5_Eyes_Eye": {
                "eyes_03_01.png": { "tags": ["almond", "medium"], "gender_fit": "both" }
            },
            "9_Mouth_Lip": {
                "mouth_05_00.png": { "tags": ["neutral", "thin"] }
            }
        }
    }"#,
    )
    .unwrap()
}

fn features(json: &str) -> DetectedFeatures {
    serde_json::from_str(json).unwrap()
}

#[test]
fn exact_tags_win_over_weaker_overlap() {
    let detected = features(
        r#"{
        "face_detected": true,
        "gender_presentation": "Male",
        "face_shape": "angular",
        "face_characteristics": ["defined jaw"]
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());

    let headshape = matched.selection.part(LayerId::Headshape);
    assert_eq!(headshape.coords(), Some((3, 0)));
    // Two exact matches saturate the confidence scale.
    assert_eq!(matched.confidence[&LayerId::Headshape], 1.0);
}

#[test]
fn confidence_never_exceeds_one() {
    let detected = features(
        r#"{
        "face_detected": true,
        "face_shape": "angular",
        "face_characteristics": ["angular", "angular", "defined jaw", "defined jaw"]
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());
    for (layer, confidence) in &matched.confidence {
        assert!(
            (0.0..=1.0).contains(confidence),
            "{layer}: confidence {confidence} out of range"
        );
    }
}

#[test]
fn gendered_entries_are_filtered_out() {
    // The female-only angular headshape must lose to the unisex one for a
    // male subject, even though its tags overlap equally.
    let detected = features(
        r#"{
        "face_detected": true,
        "gender_presentation": "Male",
        "face_shape": "angular"
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());
    assert_eq!(
        matched.selection.part(LayerId::Headshape).coords(),
        Some((3, 0))
    );
}

#[test]
fn bald_subjects_get_the_bald_fallback() {
    let detected = features(
        r#"{
        "face_detected": true,
        "hair": { "present": false }
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());

    assert_eq!(matched.selection.part(LayerId::Hair).coords(), Some((4, 0)));
    assert_eq!(
        matched.selection.part(LayerId::HairBack).coords(),
        Some((4, 0))
    );
    assert_eq!(matched.confidence[&LayerId::Hair], 1.0);
}

#[test]
fn bald_length_counts_as_bald() {
    let detected = features(
        r#"{
        "face_detected": true,
        "hair": { "present": true, "length": "bald" }
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());
    assert_eq!(matched.selection.part(LayerId::Hair).coords(), Some((4, 0)));
}

#[test]
fn mustache_clears_the_mouth() {
    let detected = features(
        r#"{
        "face_detected": true,
        "gender_presentation": "Male",
        "mouth": { "shape": "neutral" },
        "facial_hair": { "mustache": "chevron" }
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());

    assert_eq!(
        matched.selection.part(LayerId::Moustache).coords(),
        Some((2, 0))
    );
    assert!(!matched.selection.has(LayerId::Mouth));
}

#[test]
fn female_subjects_never_match_facial_hair() {
    let detected = features(
        r#"{
        "face_detected": true,
        "gender_presentation": "Female",
        "facial_hair": { "beard": "full", "mustache": "walrus" }
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());

    assert_eq!(matched.selection.gender, Gender::Female);
    assert!(!matched.selection.has(LayerId::Beard));
    assert!(!matched.selection.has(LayerId::Moustache));
}

#[test]
fn empty_metadata_falls_back_with_zero_confidence() {
    let detected = features(
        r#"{
        "face_detected": true,
        "face_shape": "angular",
        "hair": { "present": true, "length": "short" }
    }"#,
    );
    let matched = match_features(&detected, &SpriteMetadata::default());

    // Every tag-matched layer falls back to the first catalog index.
    assert_eq!(
        matched.selection.part(LayerId::Headshape).coords(),
        Some((0, 0))
    );
    assert_eq!(matched.confidence[&LayerId::Headshape], 0.0);
    assert_eq!(matched.confidence[&LayerId::Hair], 0.0);
}

#[test]
fn colors_map_from_detected_terms() {
    let detected = features(
        r#"{
        "face_detected": true,
        "skin_tone": "olive",
        "hair": { "present": true, "length": "short", "color": "black" },
        "eyes": { "color": "blue" }
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());

    assert_eq!(matched.selection.color_indices.skin, 4);
    assert_eq!(matched.selection.color_indices.hair, 5);
    assert_eq!(matched.selection.color_indices.eye, 0);
    assert_eq!(matched.selection.color_indices.accessory, 0);
}

#[test]
fn glasses_map_to_face_accessories() {
    let detected = features(
        r#"{
        "face_detected": true,
        "accessories": { "glasses": "rectangular" }
    }"#,
    );
    let matched = match_features(&detected, &metadata_fixture());

    assert_eq!(
        matched.selection.part(LayerId::AccessoryFace).coords(),
        Some((2, 3))
    );
    assert!(!matched.selection.has(LayerId::AccessoryHead));
    assert!(!matched.selection.has(LayerId::AccessoryFront));
}

#[test]
fn matched_characters_are_complete() {
    let matched = match_features(&DetectedFeatures::default(), &metadata_fixture());
    let selection = &matched.selection;

    for layer in LayerId::ALL {
        if !layer.def().optional {
            assert!(selection.has(layer), "{layer} missing from matched character");
        }
    }
    assert!(!selection.has(LayerId::Background));
}
