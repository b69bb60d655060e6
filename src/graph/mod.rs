//! Pixel graph over an RGBA image: one node per pixel, 4-neighbor adjacency,
//! disjoint-set forest for component merging.
//!
//! - [`build`] – graph construction from a decoded buffer; nodes live in one
//!   contiguous array and all neighbor/parent relations are indices into it.
//! - [`dsu`] – union-find operations (iterative path compression, union by
//!   rank) and the raster-order merge driver.

pub mod build;
pub mod dsu;

pub use build::{Node, PixelGraph};
