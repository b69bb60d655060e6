//! Owned RGBA8 image in row-major layout, 4 bytes per pixel, no padding.
//!
//! Used for the raw input, the intermediate grayscale/edge maps and the
//! segmented output. Alpha is never premultiplied.

/// A single RGBA8 pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0, 255);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Owned RGBA8 buffer of size `w × h`, tightly packed (stride == width).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Backing storage in row-major order, 4 bytes per pixel
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// Construct an opaque-black buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Pixel::BLACK)
    }

    /// Construct a buffer of size `w × h` filled with `fill`.
    pub fn filled(w: usize, h: usize, fill: Pixel) -> Self {
        let mut data = Vec::with_capacity(w * h * 4);
        for _ in 0..w * h {
            data.extend_from_slice(&[fill.r, fill.g, fill.b, fill.a]);
        }
        Self { w, h, data }
    }

    /// Adopt a raw RGBA8 byte buffer; `None` when the length is not `w*h*4`.
    pub fn from_raw(w: usize, h: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == w * h * 4).then_some(Self { w, h, data })
    }

    #[inline]
    /// Convert (x, y) to the byte offset of the pixel in `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        (y * self.w + x) * 4
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        let i = self.idx(x, y);
        Pixel::new(self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3])
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set_pixel(&mut self, x: usize, y: usize, p: Pixel) {
        let i = self.idx(x, y);
        self.data[i] = p.r;
        self.data[i + 1] = p.g;
        self.data[i + 2] = p.b;
        self.data[i + 3] = p.a;
    }

    /// Tightly packed RGBA8 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
