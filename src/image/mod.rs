pub mod io;
pub mod rgba;

pub use self::rgba::{Pixel, RgbaImage};
