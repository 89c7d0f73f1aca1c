use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crewgen::catalog::layer::LayerId;
use crewgen::foundation::color::Rgb8;
use crewgen::render::composite::tint_multiply;
use crewgen::selection::model::{CharacterSelection, ColorIndices, PartSelection, empty_parts};
use crewgen::{CrewgenResult, Gender, SpriteSource, render_portrait};

const SIZE: u32 = 8;

/// Sprite source backed by a map, for exercising the compositor without a
/// sprite tree on disk.
#[derive(Default)]
struct MemorySprites {
    sprites: HashMap<(LayerId, u32, u32), RgbaImage>,
}

impl MemorySprites {
    fn insert(&mut self, layer: LayerId, index: u32, variant: u32, color: [u8; 4]) {
        self.sprites
            .insert((layer, index, variant), RgbaImage::from_pixel(SIZE, SIZE, Rgba(color)));
    }
}

impl SpriteSource for MemorySprites {
    fn sprite(
        &self,
        layer: LayerId,
        index: u32,
        variant: u32,
        _gender: Gender,
    ) -> CrewgenResult<Option<RgbaImage>> {
        Ok(self.sprites.get(&(layer, index, variant)).cloned())
    }
}

fn bare_selection(parts: &[(LayerId, u32, u32)]) -> CharacterSelection {
    let mut map = empty_parts();
    for &(layer, index, variant) in parts {
        map.insert(layer, PartSelection::new(index, variant));
    }
    CharacterSelection {
        gender: Gender::Male,
        body_shape_index: 1,
        color_indices: ColorIndices::default(),
        parts: map,
    }
}

#[test]
fn tint_is_exact_integer_multiply() {
    let mut image = RgbaImage::from_pixel(1, 1, Rgba([200, 200, 200, 255]));
    tint_multiply(&mut image, Rgb8::new(100, 0, 255));
    // floor(200 * 100 / 255) = 78
    assert_eq!(image.get_pixel(0, 0).0, [78, 0, 200, 255]);
}

#[test]
fn skin_layers_are_tinted_with_the_skin_palette() {
    let mut sprites = MemorySprites::default();
    sprites.insert(LayerId::Body, 0, 0, [200, 200, 200, 255]);

    // Skin index 0 is #FFE0BD.
    let selection = bare_selection(&[(LayerId::Body, 0, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();

    let expected = [
        (200u32 * 255 / 255) as u8,
        (200u32 * 224 / 255) as u8,
        (200u32 * 189 / 255) as u8,
        255,
    ];
    assert_eq!(portrait.get_pixel(4, 4).0, expected);
}

#[test]
fn untinted_layers_keep_authored_colors() {
    let mut sprites = MemorySprites::default();
    sprites.insert(LayerId::Clothes, 0, 0, [10, 140, 30, 255]);

    let selection = bare_selection(&[(LayerId::Clothes, 0, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();
    assert_eq!(portrait.get_pixel(0, 0).0, [10, 140, 30, 255]);
}

#[test]
fn later_layers_draw_over_earlier_ones() {
    let mut sprites = MemorySprites::default();
    // ClothesBack sits at the back of the stack, Clothes in front of Body.
    sprites.insert(LayerId::ClothesBack, 0, 0, [255, 0, 0, 255]);
    sprites.insert(LayerId::Clothes, 0, 0, [0, 0, 255, 255]);

    let selection = bare_selection(&[(LayerId::ClothesBack, 0, 0), (LayerId::Clothes, 0, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();
    assert_eq!(portrait.get_pixel(3, 3).0, [0, 0, 255, 255]);
}

#[test]
fn missing_sprites_are_skipped_without_error() {
    let sprites = MemorySprites::default();
    let selection = bare_selection(&[(LayerId::Hair, 3, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();
    // Nothing rendered; the canvas stays transparent.
    assert!(portrait.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn moustache_suppresses_the_mouth_layer() {
    let mut sprites = MemorySprites::default();
    sprites.insert(LayerId::Mouth, 0, 0, [255, 0, 0, 255]);
    // Moustache is selected but its sprite is missing, which still counts as
    // present for the exclusivity rule.
    let selection = bare_selection(&[(LayerId::Mouth, 0, 0), (LayerId::Moustache, 1, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();
    assert!(portrait.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn semitransparent_layers_blend() {
    let mut sprites = MemorySprites::default();
    sprites.insert(LayerId::Clothes, 0, 0, [0, 0, 0, 255]);
    // Mouth is untinted and sits in front of the clothes layer.
    sprites.insert(LayerId::Mouth, 0, 0, [255, 255, 255, 128]);

    let selection = bare_selection(&[(LayerId::Clothes, 0, 0), (LayerId::Mouth, 0, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();

    let pixel = portrait.get_pixel(0, 0);
    assert_eq!(pixel.0[3], 255);
    assert!((120..=136).contains(&pixel.0[0]), "got {:?}", pixel.0);
}

#[test]
fn sprites_resize_to_the_portrait_size() {
    let mut sprites = MemorySprites::default();
    sprites
        .sprites
        .insert((LayerId::Clothes, 0, 0), RgbaImage::from_pixel(2, 2, Rgba([9, 9, 9, 255])));

    let selection = bare_selection(&[(LayerId::Clothes, 0, 0)]);
    let portrait = render_portrait(&selection, &sprites, SIZE).unwrap();
    assert_eq!(portrait.dimensions(), (SIZE, SIZE));
    assert_eq!(portrait.get_pixel(4, 4).0[3], 255);
}
