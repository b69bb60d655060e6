use segment_painter::image::{Pixel, RgbaImage};

/// Generates a solid-color RGBA image.
pub fn solid_rgba(width: usize, height: usize, color: (u8, u8, u8)) -> RgbaImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbaImage::filled(width, height, Pixel::new(color.0, color.1, color.2, 255))
}

/// Generates an image split into a left and a right half of two colors.
pub fn two_tone_rgba(
    width: usize,
    height: usize,
    left: (u8, u8, u8),
    right: (u8, u8, u8),
) -> RgbaImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = if x < width / 2 { left } else { right };
            img.set_pixel(x, y, Pixel::new(r, g, b, 255));
        }
    }
    img
}
