//! PNG output.

use std::path::Path;

use image::{GrayImage, ImageFormat};

use crate::RenderError;

/// Writes `pixels` as an 8-bit grayscale PNG, one byte per pixel, row-major.
pub fn save_png(path: &Path, width: u32, height: u32, pixels: Vec<u8>) -> Result<(), RenderError> {
    let expected = width as usize * height as usize;
    let actual = pixels.len();
    let image = GrayImage::from_raw(width, height, pixels)
        .filter(|_| actual == expected)
        .ok_or(RenderError::BufferSize { expected, actual })?;
    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
