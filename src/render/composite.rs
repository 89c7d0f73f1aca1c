//! Pixel-level compositing primitives.
//!
//! Everything here works on straight (non-premultiplied) RGBA buffers in
//! integer arithmetic, so results are exact and platform independent. The
//! `over` blend divides by the composited alpha with rounding; the multiply
//! tint truncates, matching the floor semantics of 8-bit channel products.

use image::RgbaImage;

use crate::foundation::color::Rgb8;

/// Multiply every color channel by the tint, leaving alpha untouched.
///
/// Each channel becomes `floor(c * t / 255)`. Grayscale sprites authored near
/// white take on the tint color; darker shading survives proportionally.
pub fn tint_multiply(image: &mut RgbaImage, tint: Rgb8) {
    let [tr, tg, tb] = tint.channels();
    for pixel in image.pixels_mut() {
        pixel.0[0] = mul255(pixel.0[0], tr);
        pixel.0[1] = mul255(pixel.0[1], tg);
        pixel.0[2] = mul255(pixel.0[2], tb);
    }
}

/// `floor(a * b / 255)` on 8-bit channels.
#[inline]
pub fn mul255(a: u8, b: u8) -> u8 {
    ((a as u32 * b as u32) / 255) as u8
}

/// Source-over blend of `src` onto `dst` at `(x, y)`, clipping at the edges.
///
/// Straight-alpha Porter-Duff over: fully opaque source pixels replace the
/// destination, fully transparent ones leave it unchanged, and partial
/// coverage interpolates with rounding.
pub fn overlay(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    for (sx, sy, &src_pixel) in src.enumerate_pixels() {
        let dx = x + sx as i64;
        let dy = y + sy as i64;
        if dx < 0 || dy < 0 || dx >= dst.width() as i64 || dy >= dst.height() as i64 {
            continue;
        }
        let dst_pixel = dst.get_pixel_mut(dx as u32, dy as u32);
        dst_pixel.0 = blend_over(src_pixel.0, dst_pixel.0);
    }
}

/// Blend one straight-alpha pixel over another.
fn blend_over(src: [u8; 4], dst: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u32;
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }

    let da = dst[3] as u32;
    // Alpha in units of 1/255^2; the rounded 8-bit value comes out at the end.
    let alpha = sa * 255 + da * (255 - sa);
    if alpha == 0 {
        return [0, 0, 0, 0];
    }

    let mut out = [0u8; 4];
    for channel in 0..3 {
        let sc = src[channel] as u32;
        let dc = dst[channel] as u32;
        let num = sc * sa * 255 + dc * da * (255 - sa);
        out[channel] = ((num + alpha / 2) / alpha) as u8;
    }
    out[3] = ((alpha + 127) / 255) as u8;
    out
}

/// Fill a rectangle with an opaque color, clipping at the image edges.
pub fn fill_rect(image: &mut RgbaImage, x: i64, y: i64, width: u32, height: u32, color: Rgb8) {
    let [r, g, b] = color.channels();
    for dy in 0..height as i64 {
        for dx in 0..width as i64 {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || py < 0 || px >= image.width() as i64 || py >= image.height() as i64 {
                continue;
            }
            image.put_pixel(px as u32, py as u32, image::Rgba([r, g, b, 255]));
        }
    }
}

/// Stroke a rectangle outline of the given thickness, drawn inward from the
/// rectangle bounds.
pub fn stroke_rect(
    image: &mut RgbaImage,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    thickness: u32,
    color: Rgb8,
) {
    let t = thickness.min(width).min(height);
    // Top and bottom bands.
    fill_rect(image, x, y, width, t, color);
    fill_rect(image, x, y + height as i64 - t as i64, width, t, color);
    // Left and right bands.
    fill_rect(image, x, y, t, height, color);
    fill_rect(image, x + width as i64 - t as i64, y, t, height, color);
}
