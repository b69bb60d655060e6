//! I/O helpers for RGBA images and JSON.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA8 buffer.
//! - `save_rgba_image`: write an `RgbaImage` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbaImage;
use crate::error::Error;
use image::{ImageBuffer, Rgba};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to tightly packed RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<RgbaImage, Error> {
    let img = image::open(path)
        .map_err(|e| Error::Decode {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    RgbaImage::from_raw(width, height, img.into_raw()).ok_or(Error::EmptyInput)
}

/// Save an RGBA8 buffer to disk, creating parent directories.
pub fn save_rgba_image(image: &RgbaImage, path: &Path) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.w as u32, image.h as u32, image.data.clone())
            .ok_or(Error::EmptyInput)?;
    buffer.save(path).map_err(|e| Error::Encode {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::Encode {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| Error::Encode {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Encode {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
    }
    Ok(())
}
