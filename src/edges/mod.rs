//! Edge processing: Sobel gradient magnitude over a grayscale RGBA buffer.
//!
//! Design goals
//! - Favor clarity and row-order access over micro-optimizations.
//! - Interior-only: border pixels keep the opaque-black default fill rather
//!   than clamping the kernel at the edge.
//! - Output stays RGBA8 so every stage consumes and produces the same buffer
//!   type.

pub mod grad;

/// Per-pixel Sobel gradient magnitude as an edge-intensity image.
pub use grad::sobel_magnitude;
