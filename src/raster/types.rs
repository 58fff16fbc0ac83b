//! Image types and data structures.

use crate::error::{ConvertError, Result};

/// Pixel format of an in-memory image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
    /// Single-channel 8-bit brightness (1 byte per pixel)
    Luma,
}

impl PixelFormat {
    /// Get the number of bytes per pixel.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Luma => 1,
        }
    }
}

/// A single pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Rgb([u8; 3]),
    Luma(u8),
}

/// A decoded raster image.
///
/// Pixel data is stored row-major with no padding. The buffer length is
/// checked on construction, so every `Image` holds exactly
/// `width * height * bytes_per_pixel` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl Image {
    /// Wrap a raw pixel buffer.
    ///
    /// # Errors
    /// Returns [`ConvertError::MalformedImage`] if the buffer length does not
    /// match the dimensions and format.
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(ConvertError::MalformedImage {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Build an image where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let count = width as usize * height as usize;
        let (data, format) = match pixel {
            Pixel::Rgb(rgb) => (rgb.repeat(count), PixelFormat::Rgb),
            Pixel::Luma(v) => (vec![v; count], PixelFormat::Luma),
        };
        Self {
            data,
            width,
            height,
            format,
        }
    }

    /// Convert a decoded `image` crate buffer.
    ///
    /// Grayscale sources stay single-channel; everything else becomes RGB
    /// with any alpha channel dropped.
    pub fn from_dynamic(img: &image::DynamicImage) -> Self {
        use image::ColorType;

        let (width, height) = (img.width(), img.height());
        match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => Self {
                data: img.to_luma8().into_raw(),
                width,
                height,
                format: PixelFormat::Luma,
            },
            _ => Self {
                data: img.to_rgb8().into_raw(),
                width,
                height,
                format: PixelFormat::Rgb,
            },
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw row-major pixel bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let idx = (y as usize * self.width as usize + x as usize) * bpp;
        Some(match self.format {
            PixelFormat::Rgb => Pixel::Rgb([self.data[idx], self.data[idx + 1], self.data[idx + 2]]),
            PixelFormat::Luma => Pixel::Luma(self.data[idx]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_short_buffer() {
        let err = Image::new(vec![0; 5], 2, 1, PixelFormat::Rgb).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::MalformedImage {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn new_accepts_zero_sized() {
        let img = Image::new(Vec::new(), 0, 10, PixelFormat::Rgb).unwrap();
        assert_eq!(img.pixel_count(), 0);
    }

    #[test]
    fn pixel_lookup_is_row_major() {
        let img = Image::new(vec![1, 2, 3, 4], 2, 2, PixelFormat::Luma).unwrap();
        assert_eq!(img.pixel(1, 0), Some(Pixel::Luma(2)));
        assert_eq!(img.pixel(0, 1), Some(Pixel::Luma(3)));
        assert_eq!(img.pixel(2, 0), None);
    }

    #[test]
    fn from_dynamic_keeps_grayscale_single_channel() {
        let gray = image::DynamicImage::new_luma8(4, 3);
        let img = Image::from_dynamic(&gray);
        assert_eq!(img.format(), PixelFormat::Luma);
        assert_eq!(img.data().len(), 12);

        let rgba = image::DynamicImage::new_rgba8(4, 3);
        let img = Image::from_dynamic(&rgba);
        assert_eq!(img.format(), PixelFormat::Rgb);
        assert_eq!(img.data().len(), 36);
    }
}
