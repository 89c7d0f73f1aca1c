use std::path::PathBuf;

use image::{Rgba, RgbaImage};

use crewgen::render::postcard::{CANVAS_HEIGHT, CANVAS_WIDTH, SLOT_BORDER, SLOT_FILL};
use crewgen::selection::model::default_character;
use crewgen::{
    CharacterSelection, CrewgenError, Gender, SpriteLibrary, TemplateVariant, assemble_postcard,
};

fn temp_assets_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "crewgen_postcard_test_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(dir.join("PostcardTemplates")).unwrap();
    dir
}

fn write_template(dir: &std::path::Path, filename: &str, width: u32, height: u32, color: [u8; 4]) {
    let template = RgbaImage::from_pixel(width, height, Rgba(color));
    template
        .save_with_format(
            dir.join("PostcardTemplates").join(filename),
            image::ImageFormat::Png,
        )
        .unwrap();
}

fn crew(n: usize) -> Vec<CharacterSelection> {
    (0..n).map(|_| default_character(Gender::Male)).collect()
}

#[test]
fn missing_template_is_a_hard_error() {
    let dir = temp_assets_dir();
    let sprites = SpriteLibrary::new(&dir);

    let err = assemble_postcard(TemplateVariant::Blue, &crew(1), &sprites, &dir).unwrap_err();
    assert!(matches!(err, CrewgenError::TemplateNotFound(_)), "got {err}");
}

#[test]
fn single_blue_postcard_uses_the_framed_template() {
    let dir = temp_assets_dir();
    write_template(&dir, "postcard_blue_single.png", CANVAS_WIDTH, CANVAS_HEIGHT, [40, 80, 160, 255]);
    let sprites = SpriteLibrary::new(&dir);

    let postcard = assemble_postcard(TemplateVariant::Blue, &crew(1), &sprites, &dir).unwrap();
    assert_eq!(postcard.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));

    // No sprites exist, so the portrait is fully transparent and the single
    // layout draws no frame of its own: the template shows through everywhere.
    assert_eq!(postcard.get_pixel(10, 10).0, [40, 80, 160, 255]);
    assert_eq!(postcard.get_pixel(100, 100).0, [40, 80, 160, 255]);
}

#[test]
fn grid_postcards_draw_slot_frames() {
    let dir = temp_assets_dir();
    write_template(&dir, "postcard_blue.png", CANVAS_WIDTH, CANVAS_HEIGHT, [40, 80, 160, 255]);
    let sprites = SpriteLibrary::new(&dir);

    let postcard = assemble_postcard(TemplateVariant::Blue, &crew(2), &sprites, &dir).unwrap();

    // First grid slot starts at 5.5% x 5.5%.
    let slot_x = (5.5 / 100.0 * CANVAS_WIDTH as f64) as u32;
    let slot_y = (5.5 / 100.0 * CANVAS_HEIGHT as f64) as u32;
    let square = (13.0 / 100.0 * CANVAS_WIDTH as f64) as u32;

    let corner = postcard.get_pixel(slot_x, slot_y);
    assert_eq!(corner.0[..3], SLOT_BORDER.channels());

    let center = postcard.get_pixel(slot_x + square / 2, slot_y + square / 2);
    assert_eq!(center.0[..3], SLOT_FILL.channels());

    // Third slot is empty: the template shows through.
    let third_x = (33.5 / 100.0 * CANVAS_WIDTH as f64) as u32;
    assert_eq!(postcard.get_pixel(third_x, slot_y).0, [40, 80, 160, 255]);
}

#[test]
fn orange_variant_always_uses_the_grid() {
    let dir = temp_assets_dir();
    write_template(&dir, "postcard_orange.png", CANVAS_WIDTH, CANVAS_HEIGHT, [200, 110, 40, 255]);
    let sprites = SpriteLibrary::new(&dir);

    let postcard = assemble_postcard(TemplateVariant::Orange, &crew(1), &sprites, &dir).unwrap();

    let slot_x = (5.5 / 100.0 * CANVAS_WIDTH as f64) as u32;
    let slot_y = (5.5 / 100.0 * CANVAS_HEIGHT as f64) as u32;
    assert_eq!(postcard.get_pixel(slot_x, slot_y).0[..3], SLOT_BORDER.channels());
}

#[test]
fn extra_characters_are_dropped() {
    let dir = temp_assets_dir();
    write_template(&dir, "postcard_blue.png", CANVAS_WIDTH, CANVAS_HEIGHT, [40, 80, 160, 255]);
    let sprites = SpriteLibrary::new(&dir);

    let postcard = assemble_postcard(TemplateVariant::Blue, &crew(14), &sprites, &dir).unwrap();
    assert_eq!(postcard.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
}

#[test]
fn undersized_templates_are_upscaled() {
    let dir = temp_assets_dir();
    write_template(&dir, "postcard_orange.png", 512, 307, [200, 110, 40, 255]);
    let sprites = SpriteLibrary::new(&dir);

    let postcard = assemble_postcard(TemplateVariant::Orange, &crew(2), &sprites, &dir).unwrap();
    assert_eq!(postcard.dimensions(), (CANVAS_WIDTH, CANVAS_HEIGHT));
    // Far corner away from any slot keeps the template color.
    let pixel = postcard.get_pixel(CANVAS_WIDTH - 5, CANVAS_HEIGHT - 5);
    assert_eq!(pixel.0[3], 255);
}
