// --- ACRYLIC SURFACE PAINT ---
// Tinted, noise-textured overlay drawn over the blurred backdrop.
// Pixels are premultiplied 0xAARRGGBB, the layout of a top-down 32-bit DIB.

use super::properties::{ChromeAppearance, Rgb};
use super::title_bar::{TitleBarLayout, TitleButton};
use crate::geometry::Rect;

const CLOSE_HOVER: Rgb = Rgb::new(0xE8, 0x11, 0x23);

/// Stable per-pixel noise in [0, 1). Same coordinates always give the same value,
/// so partial repaints line up.
pub fn noise_at(x: i32, y: i32) -> f32 {
    let mut h = (x as u32).wrapping_mul(0x8DA6_B343) ^ (y as u32).wrapping_mul(0xD816_3841);
    h ^= h >> 13;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 16;
    (h & 0x00FF_FFFF) as f32 / 16_777_216.0
}

fn pack_premultiplied(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let a = a.clamp(0.0, 1.0);
    let ch = |c: f32| ((c.clamp(0.0, 255.0) * a).round() as u32).min(255);
    let alpha = (a * 255.0).round() as u32;
    (alpha << 24) | (ch(r) << 16) | (ch(g) << 8) | ch(b)
}

pub fn render_surface(width: i32, height: i32, appearance: &ChromeAppearance) -> Vec<u32> {
    if width <= 0 || height <= 0 {
        return Vec::new();
    }
    let appearance = appearance.clone().normalized();
    let tint = appearance.transparent_background;
    let ratio = appearance.noise_ratio as f32;
    let alpha = appearance.acryl_opacity as f32;

    let mut pixels = vec![0u32; (width as usize) * (height as usize)];
    for y in 0..height {
        let row = (y as usize) * (width as usize);
        for x in 0..width {
            let n = noise_at(x, y) * 255.0;
            let mix = |c: u8| c as f32 * (1.0 - ratio) + n * ratio;
            pixels[row + x as usize] = pack_premultiplied(mix(tint.r), mix(tint.g), mix(tint.b), alpha);
        }
    }
    pixels
}

/// Blend a solid color over `rect` with source-over compositing.
pub fn fill_rect_over(pixels: &mut [u32], width: i32, rect: Rect, color: Rgb, alpha: f32) {
    if width <= 0 {
        return;
    }
    let height = pixels.len() as i32 / width;
    let left = rect.left.clamp(0, width);
    let right = rect.right.clamp(0, width);
    let top = rect.top.clamp(0, height);
    let bottom = rect.bottom.clamp(0, height);
    let a = alpha.clamp(0.0, 1.0);

    for y in top..bottom {
        for x in left..right {
            let idx = (y * width + x) as usize;
            let dst = pixels[idx];
            let da = ((dst >> 24) & 0xFF) as f32;
            let dr = ((dst >> 16) & 0xFF) as f32;
            let dg = ((dst >> 8) & 0xFF) as f32;
            let db = (dst & 0xFF) as f32;

            let out_a = (a * 255.0 + da * (1.0 - a)).round() as u32;
            let out_r = (color.r as f32 * a + dr * (1.0 - a)).round() as u32;
            let out_g = (color.g as f32 * a + dg * (1.0 - a)).round() as u32;
            let out_b = (color.b as f32 * a + db * (1.0 - a)).round() as u32;
            pixels[idx] = (out_a.min(255) << 24) | (out_r.min(255) << 16) | (out_g.min(255) << 8) | out_b.min(255);
        }
    }
}

/// Hover / pressed feedback for a title-bar button.
pub fn highlight_button(
    pixels: &mut [u32],
    width: i32,
    layout: &TitleBarLayout,
    button: TitleButton,
    pressed: bool,
) {
    let Some(rect) = layout.button_rect(button) else {
        return;
    };
    match button {
        TitleButton::Close => {
            fill_rect_over(pixels, width, rect, CLOSE_HOVER, if pressed { 0.7 } else { 1.0 })
        }
        _ => fill_rect_over(
            pixels,
            width,
            rect,
            Rgb::new(0x80, 0x80, 0x80),
            if pressed { 0.35 } else { 0.2 },
        ),
    }
}
