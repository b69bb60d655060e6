//! Disjoint-set operations over the pixel graph.
//!
//! Find uses iterative two-pass path compression (walk to the root, then
//! rewrite every visited parent), so lookups stay O(α) amortized without
//! recursion-depth limits on large images. Union is by rank with a
//! deterministic tie-break. The merge driver walks the grid in raster order
//! and relaxes every 4-neighbor edge; each undirected edge is visited twice,
//! which is harmless because a union is idempotent once two nodes share a
//! root, and the final partition does not depend on visitation order: the
//! distance test is a local pairwise predicate.

use super::{Node, PixelGraph};

/// Euclidean RGB distance between two node colors; alpha is ignored.
#[inline]
fn color_distance(a: &Node, b: &Node) -> f64 {
    let dr = a.r as f64 - b.r as f64;
    let dg = a.g as f64 - b.g as f64;
    let db = a.b as f64 - b.b as f64;
    (dr * dr + dg * dg + db * db).sqrt()
}

impl PixelGraph {
    /// Representative of `start`'s set, with path compression.
    ///
    /// After the call, every node on the walked chain points directly at the
    /// root.
    pub fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        while self.nodes[root].parent != root {
            root = self.nodes[root].parent;
        }
        let mut cur = start;
        while cur != root {
            let next = self.nodes[cur].parent;
            self.nodes[cur].parent = root;
            cur = next;
        }
        root
    }

    /// Merge the sets of `x` and `y` when their colors are close enough.
    ///
    /// The distance test uses the original per-pixel colors of `x` and `y`,
    /// not their roots': the merge decision is a local edge test between
    /// adjacent raster pixels, independent of how large or differently
    /// colored their current components are. Union by rank; on a rank tie
    /// `y`'s root adopts `x`'s root and its rank grows by one.
    pub fn union_sets(&mut self, x: usize, y: usize, threshold: f64) {
        let px = self.find_root(x);
        let py = self.find_root(y);
        if px == py {
            return;
        }
        if color_distance(&self.nodes[x], &self.nodes[y]) >= threshold {
            return;
        }
        if self.nodes[px].rank > self.nodes[py].rank {
            self.nodes[py].parent = px;
        } else {
            self.nodes[px].parent = py;
            if self.nodes[px].rank == self.nodes[py].rank {
                self.nodes[py].rank += 1;
            }
        }
    }

    /// Relax every grid edge in raster order, merging nodes whose color
    /// distance is below `threshold`.
    pub fn merge_adjacent(&mut self, threshold: f64) {
        for i in 0..self.nodes.len() {
            let node = self.nodes[i];
            for neighbor in [node.up, node.down, node.left, node.right]
                .into_iter()
                .flatten()
            {
                self.union_sets(i, neighbor, threshold);
            }
        }
    }

    /// Number of distinct components (roots) in the current partition.
    pub fn component_count(&mut self) -> usize {
        (0..self.nodes.len())
            .filter(|&i| self.find_root(i) == i)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{Pixel, RgbaImage};

    fn graph_from_colors(w: usize, h: usize, colors: &[(u8, u8, u8)]) -> PixelGraph {
        assert_eq!(colors.len(), w * h);
        let mut img = RgbaImage::new(w, h);
        for (i, &(r, g, b)) in colors.iter().enumerate() {
            img.set_pixel(i % w, i / w, Pixel::new(r, g, b, 255));
        }
        PixelGraph::build(&img).unwrap()
    }

    #[test]
    fn find_root_is_idempotent() {
        let mut g = graph_from_colors(
            2,
            2,
            &[(0, 0, 0), (1, 1, 1), (2, 2, 2), (250, 250, 250)],
        );
        g.merge_adjacent(17.0);
        for i in 0..g.len() {
            let root = g.find_root(i);
            assert_eq!(g.find_root(root), root);
        }
    }

    #[test]
    fn union_below_threshold_merges() {
        let mut g = graph_from_colors(2, 1, &[(10, 10, 10), (12, 12, 12)]);
        // distance = sqrt(3 * 2^2) ≈ 3.46 < 17
        g.union_sets(0, 1, 17.0);
        assert_eq!(g.find_root(0), g.find_root(1));
    }

    #[test]
    fn union_at_or_above_threshold_is_a_noop() {
        let mut g = graph_from_colors(2, 1, &[(0, 0, 0), (100, 0, 0)]);
        g.union_sets(0, 1, 17.0);
        assert_ne!(g.find_root(0), g.find_root(1));
        // Exactly-at-threshold distances do not merge either.
        let mut g = graph_from_colors(2, 1, &[(0, 0, 0), (17, 0, 0)]);
        g.union_sets(0, 1, 17.0);
        assert_ne!(g.find_root(0), g.find_root(1));
    }

    #[test]
    fn union_uses_original_pixel_colors_not_roots() {
        // 0 and 1 merge; 1's root may then carry a different color, but the
        // 1-2 edge is still judged on the raw colors of pixels 1 and 2.
        let mut g = graph_from_colors(3, 1, &[(0, 0, 0), (10, 10, 10), (20, 20, 20)]);
        g.union_sets(0, 1, 18.0);
        g.union_sets(1, 2, 18.0);
        assert_eq!(g.find_root(0), g.find_root(2));
    }

    #[test]
    fn rank_never_decreases() {
        let mut g = graph_from_colors(
            4,
            1,
            &[(0, 0, 0), (1, 1, 1), (2, 2, 2), (3, 3, 3)],
        );
        let mut max_rank_seen = 0;
        for (x, y) in [(0, 1), (2, 3), (1, 2), (0, 3)] {
            g.union_sets(x, y, 17.0);
            let rank_now = g.nodes.iter().map(|n| n.rank).max().unwrap();
            assert!(rank_now >= max_rank_seen, "rank decreased after a union");
            max_rank_seen = rank_now;
        }
    }

    #[test]
    fn tie_break_is_deterministic() {
        let mut g = graph_from_colors(2, 1, &[(5, 5, 5), (6, 6, 6)]);
        g.union_sets(0, 1, 17.0);
        // Equal ranks: y's root becomes the parent and gains rank.
        assert_eq!(g.nodes[0].parent, 1);
        assert_eq!(g.nodes[1].rank, 1);
    }

    #[test]
    fn solid_image_collapses_to_one_component() {
        let img = RgbaImage::filled(4, 4, Pixel::new(0, 0, 0, 255));
        let mut g = PixelGraph::build(&img).unwrap();
        g.merge_adjacent(17.0);
        assert_eq!(g.component_count(), 1);
        let root = g.find_root(0);
        for i in 0..g.len() {
            assert_eq!(g.find_root(i), root);
        }
    }

    #[test]
    fn merge_respects_a_hard_color_boundary() {
        // Left half dark, right half bright: two components.
        let mut colors = Vec::new();
        for _y in 0..3 {
            for x in 0..4 {
                colors.push(if x < 2 { (10, 10, 10) } else { (200, 200, 200) });
            }
        }
        let mut g = graph_from_colors(4, 3, &colors);
        g.merge_adjacent(17.0);
        assert_eq!(g.component_count(), 2);
        assert_ne!(g.find_root(g.idx(0, 0)), g.find_root(g.idx(3, 0)));
        assert_eq!(g.find_root(g.idx(0, 0)), g.find_root(g.idx(1, 2)));
    }
}
