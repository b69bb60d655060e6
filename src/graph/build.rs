//! Pixel graph construction.
//!
//! A single raster pass allocates one [`Node`] per pixel, copies its color,
//! wires the up/down/left/right links where the grid has a neighbor, and
//! seeds every node as its own disjoint-set root.

use crate::error::Error;
use crate::image::RgbaImage;

/// One graph node per pixel position.
///
/// Neighbor and parent relations are indices into the owning node array,
/// never separate allocations. `right` exists iff `x < w−1`, `down` iff
/// `y < h−1`, and so on; union operations never alter the neighbor links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
    pub up: Option<usize>,
    pub down: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    /// Disjoint-set parent; a root points at itself.
    pub parent: usize,
    /// Union-by-rank counter; only ever updated by union, never decreases.
    pub rank: u32,
}

/// Grid graph over an image, stored as one contiguous node array.
#[derive(Clone, Debug)]
pub struct PixelGraph {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Nodes in row-major order, `w * h` entries
    pub nodes: Vec<Node>,
}

impl PixelGraph {
    /// Build the grid graph from a decoded RGBA buffer.
    ///
    /// Rejects zero dimensions and a buffer whose length disagrees with the
    /// stated size; callers must not proceed to segmentation on failure.
    pub fn build(src: &RgbaImage) -> Result<Self, Error> {
        if src.w == 0 || src.h == 0 {
            return Err(Error::InvalidDimensions {
                width: src.w,
                height: src.h,
            });
        }
        if src.data.len() != src.w * src.h * 4 {
            return Err(Error::EmptyInput);
        }

        let w = src.w;
        let h = src.h;
        let count = w * h;
        let mut nodes: Vec<Node> = Vec::new();
        nodes
            .try_reserve_exact(count)
            .map_err(|_| Error::Allocation { nodes: count })?;

        for y in 0..h {
            for x in 0..w {
                let i = y * w + x;
                let p = src.pixel(x, y);
                nodes.push(Node {
                    r: p.r,
                    g: p.g,
                    b: p.b,
                    a: p.a,
                    up: (y > 0).then(|| i - w),
                    down: (y + 1 < h).then(|| i + w),
                    left: (x > 0).then(|| i - 1),
                    right: (x + 1 < w).then(|| i + 1),
                    parent: i,
                    rank: 0,
                });
            }
        }

        Ok(Self { w, h, nodes })
    }

    /// Number of nodes (`w * h`).
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    /// Convert (x, y) to the node index.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
}
