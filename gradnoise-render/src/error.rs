use std::io;

use gradnoise_core::TableError;
use image::ImageError;
use thiserror::Error;

/// An error that can occur while configuring or producing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The config file is not valid JSON5 or has a bad value.
    #[error("Invalid config: {0}")]
    Config(#[from] serde_json5::Error),
    /// The config could not be written out as JSON.
    #[error("Failed to encode config: {0}")]
    Encode(#[from] serde_json::Error),
    /// Reading the config or writing the image failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// PNG encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
    /// The requested tables could not be built.
    #[error("Invalid noise tables: {0}")]
    Tables(#[from] TableError),
    /// Width or height is zero, or the image holds more than
    /// [`MAX_PIXELS`](crate::config::MAX_PIXELS) pixels.
    #[error("Image dimensions must be non-zero and at most {max} pixels, got {width}x{height}", max = crate::config::MAX_PIXELS)]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Frequency or depth is NaN or infinite.
    #[error("Sampling parameters must be finite (frequency {frequency}, depth {depth})")]
    InvalidSampling {
        /// Requested frequency.
        frequency: f32,
        /// Requested slice depth.
        depth: f32,
    },
    /// The pixel buffer does not match the image size.
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// `width * height`
        expected: usize,
        /// Bytes supplied.
        actual: usize,
    },
}
