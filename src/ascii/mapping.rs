//! Brightness to character mapping.

use std::fmt;

use crate::error::{ConvertError, Result};
use crate::raster::{Image, PixelFormat};

use super::Ramp;

/// Rendered ASCII art: `height` rows of exactly `width` characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
    width: u32,
}

impl AsciiArt {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Total characters across all rows, excluding line separators.
    pub fn char_count(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).sum()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// Map brightness values to ramp characters, one per value, in order.
pub fn map_to_chars(brightness: &[u8], ramp: &Ramp) -> Vec<char> {
    brightness.iter().map(|&b| ramp.char_for(b)).collect()
}

/// Split a flat character sequence into rows of `width` characters.
///
/// # Errors
/// Returns [`ConvertError::InvalidDimension`] if `width` is zero.
pub fn split_rows(chars: &[char], width: u32) -> Result<Vec<String>> {
    if width == 0 {
        return Err(ConvertError::InvalidDimension {
            width,
            height: 0,
            reason: "cannot split rows of zero width",
        });
    }
    Ok(chars
        .chunks(width as usize)
        .map(|row| row.iter().collect())
        .collect())
}

/// Render a grayscale image as ASCII art.
///
/// Each pixel is mapped through `ramp` in row-major order and the result is
/// split into `image.height()` rows of `image.width()` characters.
///
/// # Errors
/// - [`ConvertError::InvalidDimension`] if the image width is zero.
/// - [`ConvertError::PixelFormat`] if the image is not grayscale.
pub fn render(image: &Image, ramp: &Ramp) -> Result<AsciiArt> {
    if image.format() != PixelFormat::Luma {
        return Err(ConvertError::PixelFormat {
            expected: PixelFormat::Luma,
            actual: image.format(),
        });
    }
    if image.width() == 0 {
        return Err(ConvertError::InvalidDimension {
            width: image.width(),
            height: image.height(),
            reason: "cannot render an image of zero width",
        });
    }

    let chars = map_to_chars(image.data(), ramp);
    debug_assert_eq!(chars.len(), image.pixel_count());

    let rows = split_rows(&chars, image.width())?;
    debug_assert_eq!(rows.len(), image.height() as usize);

    Ok(AsciiArt {
        rows,
        width: image.width(),
    })
}
