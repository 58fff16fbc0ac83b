//! Error types for the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::raster::PixelFormat;

/// Errors that can occur while turning an image file into ASCII art.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The image file is missing, unreadable, or not a decodable raster.
    #[error("failed to load image '{}': {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A zero-sized image or a zero target width.
    #[error("invalid dimensions {width}x{height}: {reason}")]
    InvalidDimension {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    /// Pixel buffer length does not match `width * height * bytes_per_pixel`.
    #[error("malformed image buffer: expected {expected} bytes, got {actual}")]
    MalformedImage { expected: usize, actual: usize },

    /// A stage received an image in the wrong pixel format.
    #[error("expected {expected:?} pixels, got {actual:?}")]
    PixelFormat {
        expected: PixelFormat,
        actual: PixelFormat,
    },

    /// Writing the rendered art failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, ConvertError>;
