//! Resizing images to the character grid.

use crate::ascii::{calculate_dimensions_with_aspect, DEFAULT_CHAR_ASPECT_RATIO};
use crate::error::Result;

use super::Image;

/// Resize an image to `target_width` columns, squeezing rows by the
/// default terminal glyph aspect ratio.
///
/// # Errors
/// Returns [`crate::ConvertError::InvalidDimension`] for a zero-sized image
/// or a zero target width.
pub fn resize(image: &Image, target_width: u32) -> Result<Image> {
    resize_with_aspect(image, target_width, DEFAULT_CHAR_ASPECT_RATIO)
}

/// Resize with a custom glyph aspect ratio.
pub fn resize_with_aspect(image: &Image, target_width: u32, char_aspect: f64) -> Result<Image> {
    let (width, height) =
        calculate_dimensions_with_aspect(image.width(), image.height(), target_width, char_aspect)?;

    log::debug!(
        "Resizing {}x{} -> {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );

    let data = box_resample(image, width, height);
    Image::new(data, width, height, image.format())
}

/// Area-average resampling.
///
/// Each output cell averages every source pixel in its footprint, per
/// channel, truncating the mean. When upscaling a footprint can be narrower
/// than one pixel, in which case it is widened to the single pixel under
/// its start, which degenerates to nearest-neighbour.
fn box_resample(image: &Image, out_width: u32, out_height: u32) -> Vec<u8> {
    let bpp = image.format().bytes_per_pixel();
    let src = image.data();
    let src_w = image.width() as usize;
    let src_h = image.height() as usize;
    let out_w = out_width as usize;
    let out_h = out_height as usize;

    let mut result = Vec::with_capacity(out_w * out_h * bpp);
    let mut sums = vec![0u32; bpp];

    for cy in 0..out_h {
        let (start_y, end_y) = span(cy, src_h, out_h);
        for cx in 0..out_w {
            let (start_x, end_x) = span(cx, src_w, out_w);

            sums.iter_mut().for_each(|s| *s = 0);
            for py in start_y..end_y {
                let row = py * src_w;
                for px in start_x..end_x {
                    let idx = (row + px) * bpp;
                    for (c, sum) in sums.iter_mut().enumerate() {
                        *sum += src[idx + c] as u32;
                    }
                }
            }

            let count = ((end_y - start_y) * (end_x - start_x)) as u32;
            result.extend(sums.iter().map(|&s| (s / count) as u8));
        }
    }

    result
}

/// Source index range `[start, end)` covered by output cell `i`.
fn span(i: usize, src_len: usize, out_len: usize) -> (usize, usize) {
    let start = i * src_len / out_len;
    let end = ((i + 1) * src_len / out_len).max(start + 1).min(src_len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{Pixel, PixelFormat};
    use crate::ConvertError;

    #[test]
    fn resize_to_target_width() {
        let img = Image::filled(200, 100, Pixel::Rgb([1, 2, 3]));
        let out = resize(&img, 100).unwrap();
        assert_eq!((out.width(), out.height()), (100, 30));
        assert_eq!(out.format(), PixelFormat::Rgb);
        assert_eq!(out.data().len(), 100 * 30 * 3);
    }

    #[test]
    fn solid_color_survives_resampling() {
        let img = Image::filled(10, 10, Pixel::Rgb([20, 20, 20]));
        let out = resize(&img, 10).unwrap();
        assert_eq!((out.width(), out.height()), (10, 6));
        assert!(out.data().iter().all(|&v| v == 20));
    }

    #[test]
    fn downscale_averages_footprint() {
        // 4x1 -> 2 columns: [0, 100] and [200, 250]
        let img = Image::new(vec![0, 100, 200, 250], 4, 1, PixelFormat::Luma).unwrap();
        let out = resize_with_aspect(&img, 2, 0.5).unwrap();
        assert_eq!((out.width(), out.height()), (2, 1));
        assert_eq!(out.data(), &[50, 225]);
    }

    #[test]
    fn upscale_repeats_pixels() {
        let img = Image::new(vec![10, 90], 2, 1, PixelFormat::Luma).unwrap();
        let out = resize_with_aspect(&img, 4, 1.0).unwrap();
        assert_eq!((out.width(), out.height()), (4, 2));
        assert_eq!(out.data(), &[10, 10, 90, 90, 10, 10, 90, 90]);
    }

    #[test]
    fn zero_width_source_is_rejected() {
        let img = Image::new(Vec::new(), 0, 5, PixelFormat::Rgb).unwrap();
        assert!(matches!(
            resize(&img, 100),
            Err(ConvertError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn zero_target_width_is_rejected() {
        let img = Image::filled(4, 4, Pixel::Luma(0));
        assert!(matches!(
            resize(&img, 0),
            Err(ConvertError::InvalidDimension { .. })
        ));
    }
}
