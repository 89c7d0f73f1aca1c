//! Single-character portrait rendering.

use image::RgbaImage;
use image::imageops::FilterType;

use crate::catalog::layer::{ColorRole, LayerId};
use crate::catalog::palette::{
    ACCESSORY_PALETTE, EYE_PALETTE, HAIR_PALETTE, PaletteColor, SKIN_PALETTE,
};
use crate::foundation::error::CrewgenResult;
use crate::render::composite::{overlay, tint_multiply};
use crate::render::sprites::SpriteSource;
use crate::selection::model::CharacterSelection;

/// Default square edge of a rendered portrait, in pixels.
pub const PORTRAIT_SIZE: u32 = 256;

/// Render a character to a `size` x `size` RGBA image.
///
/// Layers composite back to front onto a transparent canvas. Absent layers
/// and layers whose sprite file is missing are skipped; the mouth is skipped
/// whenever a moustache is present regardless of the selection's own mouth
/// entry. Sprites authored at other resolutions are resampled to `size`
/// before tinting.
pub fn render_portrait(
    selection: &CharacterSelection,
    sprites: &impl SpriteSource,
    size: u32,
) -> CrewgenResult<RgbaImage> {
    let mut canvas = RgbaImage::from_pixel(size, size, image::Rgba([0, 0, 0, 0]));

    let colors = &selection.color_indices;
    let skin = palette_color(&SKIN_PALETTE, colors.skin, 2);
    let hair = palette_color(&HAIR_PALETTE, colors.hair, 3);
    let eye = palette_color(&EYE_PALETTE, colors.eye, 2);
    let accessory = palette_color(&ACCESSORY_PALETTE, colors.accessory, 1);

    for layer in LayerId::ALL {
        let Some((index, variant)) = selection.part(layer).coords() else {
            continue;
        };
        if layer == LayerId::Mouth && selection.has(LayerId::Moustache) {
            continue;
        }

        let Some(mut sprite) = sprites.sprite(layer, index, variant, selection.gender)? else {
            continue;
        };
        if sprite.dimensions() != (size, size) {
            sprite = image::imageops::resize(&sprite, size, size, FilterType::Lanczos3);
        }

        let tint = match layer.def().color_role {
            ColorRole::None => None,
            ColorRole::Skin => Some(skin),
            ColorRole::Hair => Some(hair),
            ColorRole::Eye => Some(eye),
            ColorRole::Accessory => Some(accessory),
        };
        if let Some(tint) = tint {
            tint_multiply(&mut sprite, tint.rgb());
        }

        overlay(&mut canvas, &sprite, 0, 0);
    }

    Ok(canvas)
}

/// Palette entry for an index, falling back to a known-good default when the
/// index is out of range.
fn palette_color(palette: &'static [PaletteColor], index: u32, fallback: usize) -> &'static PaletteColor {
    palette
        .get(index as usize)
        .unwrap_or_else(|| &palette[fallback])
}
