use crate::foundation::color::Rgb8;

/// A single palette entry.
#[derive(Clone, Copy, Debug)]
pub struct PaletteColor {
    /// Human-readable name.
    pub name: &'static str,
    /// `#RRGGBB` hex value used for multiply tinting.
    pub hex: &'static str,
}

impl PaletteColor {
    /// Parsed RGB value of [`PaletteColor::hex`].
    pub fn rgb(&self) -> Rgb8 {
        // Palette hex values are static and covered by tests.
        Rgb8::from_hex(self.hex).unwrap_or(Rgb8::new(0, 0, 0))
    }
}

/// Body-shape names; selection is by array position.
///
/// Only sprite indices 0 and 1 exist on disk; the body shape is game-facing
/// metadata and the closest sprite is rendered.
pub const BODY_SHAPES: [&str; 4] = ["Thin", "Average", "Bulky", "Fat"];

/// Skin tone palette, light to dark.
pub const SKIN_PALETTE: [PaletteColor; 7] = [
    PaletteColor { name: "Very Light", hex: "#FFE0BD" },
    PaletteColor { name: "Light", hex: "#FFCD94" },
    PaletteColor { name: "Light Medium", hex: "#EAC086" },
    PaletteColor { name: "Medium", hex: "#C68642" },
    PaletteColor { name: "Olive", hex: "#A67C52" },
    PaletteColor { name: "Brown", hex: "#8D5524" },
    PaletteColor { name: "Dark Brown", hex: "#664229" },
];

/// Hair color palette.
pub const HAIR_PALETTE: [PaletteColor; 8] = [
    PaletteColor { name: "Platinum Blonde", hex: "#F5F5DC" },
    PaletteColor { name: "Blonde", hex: "#E5C18A" },
    PaletteColor { name: "Light Brown", hex: "#A67C52" },
    PaletteColor { name: "Brown", hex: "#6E4A2D" },
    PaletteColor { name: "Dark Brown", hex: "#4A2C1C" },
    PaletteColor { name: "Black", hex: "#1C1C1C" },
    PaletteColor { name: "Auburn", hex: "#8B4513" },
    PaletteColor { name: "Red", hex: "#C85A32" },
];

/// Eye color palette.
pub const EYE_PALETTE: [PaletteColor; 6] = [
    PaletteColor { name: "Blue", hex: "#5A9BCF" },
    PaletteColor { name: "Green", hex: "#5FA777" },
    PaletteColor { name: "Brown", hex: "#6E4A2D" },
    PaletteColor { name: "Hazel", hex: "#8D6E49" },
    PaletteColor { name: "Gray", hex: "#8FA8B0" },
    PaletteColor { name: "Amber", hex: "#D4A650" },
];

/// Accessory color palette.
pub const ACCESSORY_PALETTE: [PaletteColor; 5] = [
    PaletteColor { name: "Black", hex: "#1C1C1C" },
    PaletteColor { name: "Brown", hex: "#6E4A2D" },
    PaletteColor { name: "Gray", hex: "#808080" },
    PaletteColor { name: "Silver", hex: "#C0C0C0" },
    PaletteColor { name: "Amber Gold", hex: "#FFD700" },
];

/// Last skin index counted as "light"; indices above it are "dark".
pub const SKIN_SPLIT: u32 = 4;

/// Probability of drawing from the light sub-range when a requested skin
/// range straddles [`SKIN_SPLIT`].
pub const SKIN_LIGHT_WEIGHT: f64 = 0.9;

/// Inclusive skin tone range used to constrain random synthesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkinToneRange {
    /// Lowest allowed skin index.
    pub min: u32,
    /// Highest allowed skin index.
    pub max: u32,
}

impl SkinToneRange {
    /// Full palette range.
    pub const FULL: SkinToneRange = SkinToneRange {
        min: 0,
        max: SKIN_PALETTE.len() as u32 - 1,
    };

    /// Build a range; components are clamped to palette bounds when sampled.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

impl Default for SkinToneRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// Broad appearance groups used to pick plausible skin tone ranges for
/// generated crews.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ethnicity {
    /// Very light to light medium tones.
    European,
    /// Brown to dark brown tones.
    African,
    /// Light to medium tones.
    Asian,
    /// Medium to olive tones.
    MiddleEastern,
    /// Light medium to olive tones.
    Hispanic,
    /// Any skin tone.
    Mixed,
}

impl Ethnicity {
    /// Skin tone range associated with this group.
    pub const fn skin_range(self) -> SkinToneRange {
        match self {
            Ethnicity::European => SkinToneRange::new(0, 2),
            Ethnicity::African => SkinToneRange::new(5, 6),
            Ethnicity::Asian => SkinToneRange::new(1, 3),
            Ethnicity::MiddleEastern => SkinToneRange::new(3, 4),
            Ethnicity::Hispanic => SkinToneRange::new(2, 4),
            Ethnicity::Mixed => SkinToneRange::FULL,
        }
    }
}
