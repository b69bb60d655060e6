#![doc = include_str!("../README.md")]

pub mod classify;
pub mod edges;
pub mod error;
pub mod graph;
pub mod gray;
pub mod image;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::Error;
pub use crate::graph::{Node, PixelGraph};
pub use crate::image::{Pixel, RgbaImage};
pub use crate::pipeline::{SegmentationParams, SegmentationReport, Segmenter};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use segment_painter::prelude::*;
///
/// # fn main() {
/// let img = RgbaImage::filled(16, 16, Pixel::new(90, 90, 90, 255));
/// let segmenter = Segmenter::new(SegmentationParams::default());
/// let mut rng = StdRng::seed_from_u64(7);
/// let report = segmenter.process(&img, &mut rng).unwrap();
/// println!("components={}", report.components);
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Pixel, RgbaImage};
    pub use crate::{SegmentationParams, SegmentationReport, Segmenter};
}
