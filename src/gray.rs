//! Grayscale conversion: integer average of the RGB channels, alpha preserved.

use crate::image::{Pixel, RgbaImage};

/// Collapse RGB to a single gray value per pixel.
///
/// `gray = (r + g + b) / 3` with integer truncation; the output pixel is
/// `(gray, gray, gray, a)`. A pixel that already has `r == g == b` maps to
/// itself.
pub fn to_grayscale(src: &RgbaImage) -> RgbaImage {
    let mut out = RgbaImage::new(src.w, src.h);
    for y in 0..src.h {
        for x in 0..src.w {
            let p = src.pixel(x, y);
            let gray = ((p.r as u16 + p.g as u16 + p.b as u16) / 3) as u8;
            out.set_pixel(x, y, Pixel::new(gray, gray, gray, p.a));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_input_is_unchanged() {
        let mut img = RgbaImage::new(4, 3);
        for y in 0..3 {
            for x in 0..4 {
                let v = (x * 37 + y * 11) as u8;
                img.set_pixel(x, y, Pixel::new(v, v, v, 200));
            }
        }
        assert_eq!(to_grayscale(&img), img);
    }

    #[test]
    fn averages_with_truncation_and_keeps_alpha() {
        let mut img = RgbaImage::new(1, 1);
        img.set_pixel(0, 0, Pixel::new(10, 20, 31, 77));
        let out = to_grayscale(&img);
        // (10 + 20 + 31) / 3 = 20 (61 / 3 truncates)
        assert_eq!(out.pixel(0, 0), Pixel::new(20, 20, 20, 77));
    }

    #[test]
    fn channel_sum_does_not_overflow() {
        let mut img = RgbaImage::new(1, 1);
        img.set_pixel(0, 0, Pixel::new(255, 255, 255, 255));
        assert_eq!(to_grayscale(&img).pixel(0, 0), Pixel::new(255, 255, 255, 255));
    }
}
