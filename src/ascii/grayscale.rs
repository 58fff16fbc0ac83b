//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use crate::error::Result;
use crate::raster::{Image, PixelFormat};

/// Luma of one RGB triplet.
///
/// `Y = 0.299*R + 0.587*G + 0.114*B`, evaluated in integer math with the
/// coefficients scaled by 1000 and rounded to nearest. The weights sum to
/// 1000, so the result never exceeds 255.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let (r, g, b) = (r as u32, g as u32, b as u32);
    ((299 * r + 587 * g + 114 * b + 500) / 1000) as u8
}

/// Convert an image to single-channel grayscale.
///
/// RGB input goes through [`luma`]; grayscale input is returned as a copy.
pub fn to_grayscale(image: &Image) -> Result<Image> {
    let gray = match image.format() {
        PixelFormat::Luma => return Ok(image.clone()),
        PixelFormat::Rgb => image
            .data()
            .chunks_exact(3)
            .map(|rgb| luma(rgb[0], rgb[1], rgb[2]))
            .collect(),
    };

    log::debug!("Converted {}x{} image to grayscale", image.width(), image.height());

    Image::new(gray, image.width(), image.height(), PixelFormat::Luma)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    #[test]
    fn extremes() {
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
    }

    #[test]
    fn primaries_round_to_nearest() {
        // 0.299 * 255 = 76.245
        assert_eq!(luma(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(luma(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(luma(0, 0, 255), 29);
    }

    #[test]
    fn neutral_gray_is_unchanged() {
        for v in [1, 20, 128, 200, 254] {
            assert_eq!(luma(v, v, v), v);
        }
    }

    #[test]
    fn rgb_image_becomes_single_channel() {
        let img = Image::filled(3, 2, Pixel::Rgb([20, 20, 20]));
        let gray = to_grayscale(&img).unwrap();
        assert_eq!(gray.format(), PixelFormat::Luma);
        assert_eq!((gray.width(), gray.height()), (3, 2));
        assert_eq!(gray.data(), &[20; 6]);
    }

    #[test]
    fn grayscale_input_passes_through() {
        let img = Image::filled(2, 2, Pixel::Luma(77));
        assert_eq!(to_grayscale(&img).unwrap(), img);
    }
}
