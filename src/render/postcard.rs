//! Postcard assembly: a landscape template with framed portrait slots.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;
use image::imageops::FilterType;
use rayon::prelude::*;

use crate::foundation::color::Rgb8;
use crate::foundation::error::{CrewgenError, CrewgenResult};
use crate::render::composite::{fill_rect, overlay, stroke_rect};
use crate::render::portrait::{PORTRAIT_SIZE, render_portrait};
use crate::render::sprites::SpriteSource;
use crate::selection::model::CharacterSelection;

/// Postcard canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 1024;
/// Postcard canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 614;
/// Most characters a postcard can hold.
pub const MAX_CHARACTERS: usize = 10;

/// Slot background fill (`#EDE7DD`).
pub const SLOT_FILL: Rgb8 = Rgb8::new(237, 231, 221);
/// Slot border color (`#C8BFB0`).
pub const SLOT_BORDER: Rgb8 = Rgb8::new(200, 191, 176);
/// Slot border thickness in pixels.
pub const SLOT_BORDER_WIDTH: u32 = 3;
/// Gap between a slot frame and the portrait inside it, in pixels.
pub const SLOT_PADDING: u32 = 4;

/// Postcard template family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateVariant {
    /// Blue artwork; has a dedicated single-portrait template.
    Blue,
    /// Orange artwork; always uses the grid layout.
    Orange,
}

impl TemplateVariant {
    /// Lowercase name, identical to the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            TemplateVariant::Blue => "blue",
            TemplateVariant::Orange => "orange",
        }
    }
}

impl std::str::FromStr for TemplateVariant {
    type Err = CrewgenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blue" => Ok(TemplateVariant::Blue),
            "orange" => Ok(TemplateVariant::Orange),
            other => Err(CrewgenError::render(format!(
                "unknown template variant '{other}' (expected 'blue' or 'orange')"
            ))),
        }
    }
}

/// One portrait slot, in percent of the canvas dimensions.
#[derive(Clone, Copy, Debug)]
pub struct Slot {
    /// Left edge, percent of canvas width.
    pub x: f64,
    /// Top edge, percent of canvas height.
    pub y: f64,
    /// Width, percent of canvas width.
    pub width: f64,
    /// Height, percent of canvas height.
    pub height: f64,
}

impl Slot {
    /// Pixel position and size on the canvas.
    pub fn to_pixels(self) -> (i64, i64, u32, u32) {
        let x = (self.x / 100.0 * CANVAS_WIDTH as f64) as i64;
        let y = (self.y / 100.0 * CANVAS_HEIGHT as f64) as i64;
        let w = (self.width / 100.0 * CANVAS_WIDTH as f64) as u32;
        let h = (self.height / 100.0 * CANVAS_HEIGHT as f64) as u32;
        (x, y, w, h)
    }
}

/// The one large slot used by the blue single-portrait template, sized to its
/// printed frame.
const SINGLE_SLOT: [Slot; 1] = [Slot {
    x: 5.37,
    y: 8.23,
    width: 24.88,
    height: 39.44,
}];

/// Grid layout: six slots across the top row, four on the bottom. The top row
/// stops short of the right edge to clear the template artwork.
const GRID_SLOTS: [Slot; 10] = [
    Slot { x: 5.5, y: 5.5, width: 13.0, height: 26.0 },
    Slot { x: 19.5, y: 5.5, width: 13.0, height: 26.0 },
    Slot { x: 33.5, y: 5.5, width: 13.0, height: 26.0 },
    Slot { x: 47.5, y: 5.5, width: 13.0, height: 26.0 },
    Slot { x: 61.5, y: 5.5, width: 13.0, height: 26.0 },
    Slot { x: 75.5, y: 5.5, width: 13.0, height: 26.0 },
    Slot { x: 5.5, y: 33.0, width: 13.0, height: 26.0 },
    Slot { x: 19.5, y: 33.0, width: 13.0, height: 26.0 },
    Slot { x: 33.5, y: 33.0, width: 13.0, height: 26.0 },
    Slot { x: 47.5, y: 33.0, width: 13.0, height: 26.0 },
];

/// Whether this combination uses the dedicated single-portrait layout.
fn is_single_layout(variant: TemplateVariant, character_count: usize) -> bool {
    variant == TemplateVariant::Blue && character_count == 1
}

/// Slots for a character count and template variant.
pub fn slot_layout(variant: TemplateVariant, character_count: usize) -> &'static [Slot] {
    if is_single_layout(variant, character_count) {
        &SINGLE_SLOT
    } else {
        &GRID_SLOTS
    }
}

/// Template filename for a variant and character count.
pub fn template_filename(variant: TemplateVariant, character_count: usize) -> &'static str {
    if is_single_layout(variant, character_count) {
        "postcard_blue_single.png"
    } else {
        match variant {
            TemplateVariant::Blue => "postcard_blue.png",
            TemplateVariant::Orange => "postcard_orange.png",
        }
    }
}

/// Assemble a postcard for up to [`MAX_CHARACTERS`] characters.
///
/// `template_dir` is the directory holding `PostcardTemplates/`. Extra
/// characters beyond the slot count are dropped silently; a missing template
/// file is a hard error. Portraits render in parallel, then composite onto
/// the canvas in slot order.
pub fn assemble_postcard<S>(
    variant: TemplateVariant,
    characters: &[CharacterSelection],
    sprites: &S,
    template_dir: &Path,
) -> CrewgenResult<RgbaImage>
where
    S: SpriteSource + Sync,
{
    let template = load_template(variant, characters.len(), template_dir)?;

    let mut canvas =
        RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, image::Rgba([255, 255, 255, 255]));
    overlay(&mut canvas, &template, 0, 0);

    let single = is_single_layout(variant, characters.len());
    let slots = slot_layout(variant, characters.len());
    let count = characters.len().min(MAX_CHARACTERS).min(slots.len());

    tracing::info!(
        variant = variant.name(),
        characters = characters.len(),
        rendered = count,
        "assembling postcard"
    );

    let portraits: Vec<RgbaImage> = characters[..count]
        .par_iter()
        .map(|character| render_portrait(character, sprites, PORTRAIT_SIZE))
        .collect::<CrewgenResult<_>>()?;

    for (portrait, slot) in portraits.iter().zip(slots) {
        let (slot_x, slot_y, slot_w, slot_h) = slot.to_pixels();

        let (render_w, render_h, padding) = if single {
            // The template's printed frame replaces the drawn one.
            (slot_w, slot_h, 0)
        } else {
            let square = slot_w;
            fill_rect(&mut canvas, slot_x, slot_y, square, square, SLOT_FILL);
            stroke_rect(
                &mut canvas,
                slot_x,
                slot_y,
                square,
                square,
                SLOT_BORDER_WIDTH,
                SLOT_BORDER,
            );
            (square, square, SLOT_PADDING)
        };

        let scaled = image::imageops::resize(
            portrait,
            render_w.saturating_sub(padding * 2).max(1),
            render_h.saturating_sub(padding * 2).max(1),
            FilterType::Lanczos3,
        );
        overlay(
            &mut canvas,
            &scaled,
            slot_x + padding as i64,
            slot_y + padding as i64,
        );
    }

    Ok(canvas)
}

/// Path to the template file for a variant and character count.
pub fn template_path(
    variant: TemplateVariant,
    character_count: usize,
    template_dir: &Path,
) -> PathBuf {
    template_dir
        .join("PostcardTemplates")
        .join(template_filename(variant, character_count))
}

fn load_template(
    variant: TemplateVariant,
    character_count: usize,
    template_dir: &Path,
) -> CrewgenResult<RgbaImage> {
    let path = template_path(variant, character_count, template_dir);
    if !path.exists() {
        return Err(CrewgenError::TemplateNotFound(path.display().to_string()));
    }
    let mut template = image::open(&path)
        .with_context(|| format!("decode postcard template '{}'", path.display()))?
        .into_rgba8();
    if template.dimensions() != (CANVAS_WIDTH, CANVAS_HEIGHT) {
        template =
            image::imageops::resize(&template, CANVAS_WIDTH, CANVAS_HEIGHT, FilterType::Lanczos3);
    }
    Ok(template)
}
