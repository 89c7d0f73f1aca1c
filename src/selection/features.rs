//! Detected-features input produced by an external vision analyzer.
//!
//! The document is untrusted and possibly partial: every field defaults when
//! missing, and the matcher only ever reads through accessors that tolerate
//! absence. No validation beyond that is performed here.

/// Structured description of one detected face.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DetectedFeatures {
    /// Whether the analyzer found a face at all.
    pub face_detected: bool,
    /// `"Male"`, `"Female"`, or anything else (treated as male).
    pub gender_presentation: Option<String>,
    /// Overall face shape term (`"oval"`, `"angular"`, ...).
    pub face_shape: Option<String>,
    /// Free-form face descriptors (`"angular jaw"`, ...).
    pub face_characteristics: Vec<String>,
    /// Skin tone term matching the palette names.
    pub skin_tone: Option<String>,
    /// Hair description.
    pub hair: HairFeatures,
    /// Facial hair description.
    pub facial_hair: FacialHairFeatures,
    /// Nose description.
    pub nose: NoseFeatures,
    /// Eye description.
    pub eyes: EyeFeatures,
    /// Mouth description.
    pub mouth: MouthFeatures,
    /// Worn accessories.
    pub accessories: AccessoryFeatures,
    /// Age-related markers.
    pub age_markers: AgeMarkers,
    /// Whole-face descriptors.
    pub overall_characteristics: Vec<String>,
}

/// Hair sub-record.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HairFeatures {
    /// Whether any hair is visible.
    pub present: bool,
    /// Length term; `"bald"` triggers the bald fallback.
    pub length: Option<String>,
    /// Style term (`"wavy"`, `"slicked"`, ...).
    pub style: Option<String>,
    /// Color term matching the hair palette names.
    pub color: Option<String>,
    /// Extra descriptors.
    pub characteristics: Vec<String>,
}

/// Facial-hair sub-record; both values are categorical with `"none"`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FacialHairFeatures {
    /// `"none"`, `"stubble"`, `"goatee"`, or `"full"`.
    pub beard: Option<String>,
    /// `"none"`, `"thin"`, `"handlebar"`, `"chevron"`, or `"walrus"`.
    pub mustache: Option<String>,
}

/// Nose sub-record.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NoseFeatures {
    /// Size term.
    pub size: Option<String>,
    /// Shape term.
    pub shape: Option<String>,
    /// Bridge height term.
    pub bridge: Option<String>,
    /// Extra descriptors.
    pub characteristics: Vec<String>,
}

/// Eye sub-record.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EyeFeatures {
    /// Shape term.
    pub shape: Option<String>,
    /// Size term.
    pub size: Option<String>,
    /// Color term matching the eye palette names.
    pub color: Option<String>,
}

/// Mouth sub-record.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MouthFeatures {
    /// Size term.
    pub size: Option<String>,
    /// Shape term.
    pub shape: Option<String>,
    /// Expression term.
    pub expression: Option<String>,
}

/// Accessories sub-record.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AccessoryFeatures {
    /// `"none"`, `"round"`, `"rectangular"`, or `"monocle"`.
    pub glasses: Option<String>,
    /// Anything else worth noting (`"scar"`, `"beauty mark"`, ...).
    pub other: Vec<String>,
}

/// Age-marker sub-record.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AgeMarkers {
    /// `"young"`, `"middle"`, `"mature"`, or `"elderly"`.
    pub apparent_age: Option<String>,
    /// `"none"`, `"minimal"`, `"moderate"`, or `"prominent"`.
    pub wrinkles: Option<String>,
    /// Specific wrinkle locations.
    pub details: Vec<String>,
}
