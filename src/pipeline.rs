//! Stage orchestration: grayscale → Sobel → pixel graph → merge → classify.
//!
//! The pipeline is pure over in-memory buffers and knows nothing about the
//! filesystem; decode/encode live in [`crate::image::io`] and are wired up by
//! the caller. Stages run strictly in sequence, each to completion; any
//! failure aborts the run with no partial output.

use log::debug;
use rand::Rng;
use serde::Deserialize;

use crate::classify::{color_components, Classified};
use crate::edges::sobel_magnitude;
use crate::error::Error;
use crate::graph::PixelGraph;
use crate::gray::to_grayscale;
use crate::image::RgbaImage;

/// Knobs for a segmentation run.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SegmentationParams {
    /// Maximum Euclidean RGB distance between adjacent pixels that still
    /// merges them into one component.
    pub threshold: f64,
}

impl Default for SegmentationParams {
    fn default() -> Self {
        Self { threshold: 17.0 }
    }
}

/// All stage outputs of one run.
#[derive(Clone, Debug)]
pub struct SegmentationReport {
    /// Grayscale conversion of the source.
    pub grayscale: RgbaImage,
    /// Sobel edge-intensity map of the grayscale image.
    pub edges: RgbaImage,
    /// Flat-colored segmentation result.
    pub segmented: RgbaImage,
    /// Number of components in the final partition.
    pub components: usize,
}

/// Whole-image segmenter configured once and run per image.
#[derive(Clone, Debug, Default)]
pub struct Segmenter {
    params: SegmentationParams,
}

impl Segmenter {
    pub fn new(params: SegmentationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SegmentationParams {
        &self.params
    }

    /// Run the full pipeline over a decoded RGBA buffer.
    ///
    /// The generator drives the classifier's random component colors; pass a
    /// seeded RNG for reproducible palettes.
    pub fn process<R: Rng>(
        &self,
        src: &RgbaImage,
        rng: &mut R,
    ) -> Result<SegmentationReport, Error> {
        let grayscale = to_grayscale(src);
        debug!("Segmenter::process grayscale {}x{}", grayscale.w, grayscale.h);

        let edges = sobel_magnitude(&grayscale);
        debug!("Segmenter::process sobel magnitude done");

        let mut graph = PixelGraph::build(&edges)?;
        graph.merge_adjacent(self.params.threshold);
        debug!(
            "Segmenter::process merged at threshold {}",
            self.params.threshold
        );

        let Classified {
            image: segmented,
            components,
        } = color_components(&mut graph, rng);
        debug!("Segmenter::process {components} components");

        Ok(SegmentationReport {
            grayscale,
            edges,
            segmented,
            components,
        })
    }
}
