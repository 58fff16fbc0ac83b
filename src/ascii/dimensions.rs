//! Dimension calculation for aspect-ratio-correct ASCII rendering.

use crate::error::{ConvertError, Result};

/// Default output width in characters.
pub const DEFAULT_TARGET_WIDTH: u32 = 100;

/// Default terminal character aspect ratio (height / width).
/// Terminal glyphs are taller than wide, so rows are squeezed by this factor.
pub const DEFAULT_CHAR_ASPECT_RATIO: f64 = 1.65;

/// Calculate the character grid size for an image.
///
/// The width is always `target_width`. The height keeps the image's aspect
/// ratio and then divides by the glyph aspect:
///
/// `height = round(target_width * img_height / img_width / 1.65)`
///
/// # Errors
/// Returns [`ConvertError::InvalidDimension`] if the image has a zero side
/// or `target_width` is zero.
///
/// # Example
/// ```
/// # use img2ascii::ascii::calculate_dimensions;
/// // 200x100 source at width 100: round(100 * 0.5 / 1.65) = round(30.3) = 30
/// assert_eq!(calculate_dimensions(200, 100, 100).unwrap(), (100, 30));
/// ```
pub fn calculate_dimensions(img_width: u32, img_height: u32, target_width: u32) -> Result<(u32, u32)> {
    calculate_dimensions_with_aspect(img_width, img_height, target_width, DEFAULT_CHAR_ASPECT_RATIO)
}

/// Calculate the character grid size with a custom glyph aspect ratio.
pub fn calculate_dimensions_with_aspect(
    img_width: u32,
    img_height: u32,
    target_width: u32,
    char_aspect: f64,
) -> Result<(u32, u32)> {
    if img_width == 0 || img_height == 0 {
        return Err(ConvertError::InvalidDimension {
            width: img_width,
            height: img_height,
            reason: "source image has a zero-length side",
        });
    }
    if target_width == 0 {
        return Err(ConvertError::InvalidDimension {
            width: img_width,
            height: img_height,
            reason: "target width must be positive",
        });
    }

    let ratio = img_height as f64 / img_width as f64 / char_aspect;
    let height = (target_width as f64 * ratio).round() as u32;

    Ok((target_width, height))
}
