//! Component classification: one flat output color per disjoint-set
//! component, propagated to every member pixel.
//!
//! The rules run when a node turns out to be its own representative, in
//! priority order: bright roots (`r > 150`) become opaque white, near-black
//! roots (`r < 5`) become opaque black, tiny components become opaque black,
//! and everything else gets a fresh uniformly random RGB triple from the
//! injected generator. Member pixels always receive their root's current
//! color with full opacity.

use rand::Rng;

use crate::graph::PixelGraph;
use crate::image::{Pixel, RgbaImage};

/// Output buffer plus the component tally observed during the pass.
#[derive(Clone, Debug)]
pub struct Classified {
    pub image: RgbaImage,
    /// Number of distinct roots encountered.
    pub components: usize,
}

/// Assign flat colors to components and paint every member pixel.
///
/// Mutates root node colors in place; the grid topology is untouched. The
/// generator is drawn from once per qualifying component, so a fixed seed
/// makes the palette reproducible.
pub fn color_components<R: Rng>(graph: &mut PixelGraph, rng: &mut R) -> Classified {
    let count = graph.len();
    let mut out = RgbaImage::new(graph.w, graph.h);
    let mut sizes = vec![0u32; count];
    let mut components = 0usize;

    for i in 0..count {
        let root = graph.find_root(i);
        if root == i {
            components += 1;
            let node = &mut graph.nodes[root];
            if node.r > 150 {
                node.r = 255;
                node.g = 255;
                node.b = 255;
            } else if node.r < 5 {
                node.r = 0;
                node.g = 0;
                node.b = 0;
            } else if sizes[i] < 4 {
                // The counter is read at the node's own offset before this
                // root's member tally is complete, so the small-component
                // rule fires only for roots visited ahead of their members.
                // Kept as-is for output compatibility.
                node.r = 0;
                node.g = 0;
                node.b = 0;
            } else {
                node.r = rng.gen_range(0..=255);
                node.g = rng.gen_range(0..=255);
                node.b = rng.gen_range(0..=255);
            }
        }
        let p = graph.nodes[root];
        out.set_pixel(i % graph.w, i / graph.w, Pixel::new(p.r, p.g, p.b, 255));
        sizes[root] += 1;
    }

    Classified {
        image: out,
        components,
    }
}
