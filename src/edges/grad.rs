//! Sobel gradient magnitude.
//!
//! Convolves the 3×3 Sobel kernel pair over the first channel of an
//! already-grayscale RGBA buffer and writes `(mag, mag, mag, 255)` per pixel,
//! `mag = round(sqrt(gx^2 + gy^2))` clamped into [0, 255].
//!
//! Only strictly interior pixels (`1 ≤ x < w−1`, `1 ≤ y < h−1`) are computed;
//! the outermost row and column keep the opaque-black default fill.
//!
//! Complexity: O(W·H); memory: one RGBA buffer.

use crate::image::{Pixel, RgbaImage};

/// Compute the per-pixel Sobel gradient magnitude of a grayscale image.
///
/// Samples the red channel only; valid because the source is grayscale
/// (`r == g == b`). Images narrower or shorter than 3 pixels have no interior
/// and come back entirely at the default fill.
pub fn sobel_magnitude(src: &RgbaImage) -> RgbaImage {
    let w = src.w;
    let h = src.h;
    let mut out = RgbaImage::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let luma = |x: usize, y: usize| -> i32 { src.pixel(x, y).r as i32 };

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let tl = luma(x - 1, y - 1);
            let tm = luma(x, y - 1);
            let tr = luma(x + 1, y - 1);
            let ml = luma(x - 1, y);
            let mr = luma(x + 1, y);
            let bl = luma(x - 1, y + 1);
            let bm = luma(x, y + 1);
            let br = luma(x + 1, y + 1);

            let gx = (tr - tl) + 2 * (mr - ml) + (br - bl);
            let gy = (bl - tl) + 2 * (bm - tm) + (br - tr);

            let magnitude = ((gx * gx + gy * gy) as f64).sqrt().round();
            let m = magnitude.clamp(0.0, 255.0) as u8;
            out.set_pixel(x, y, Pixel::new(m, m, m, 255));
        }
    }

    out
}
