//! Conversion pipeline for img2ascii.
//!
//! Drives the stages in order: load, resize, grayscale, map. Each stage
//! takes one [`Image`] and produces a new one; nothing is shared between
//! runs, so a single `Pipeline` can be reused for any number of images.

use std::io::Write;
use std::path::Path;

use crate::ascii::{self, AsciiArt, Ramp, DEFAULT_TARGET_WIDTH};
use crate::error::Result;
use crate::raster::{self, Image};

/// Settings for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    /// Output width in characters
    target_width: u32,
    /// Brightness ramp, darkest first
    ramp: Ramp,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            ramp: Ramp::STANDARD,
        }
    }
}

impl Pipeline {
    /// Create a pipeline with the standard ramp.
    ///
    /// A zero width is accepted here and rejected by the resize stage.
    pub fn new(target_width: u32) -> Self {
        Self {
            target_width,
            ..Self::default()
        }
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// Run every stage after loading on an in-memory image.
    pub fn convert_image(&self, image: &Image) -> Result<AsciiArt> {
        let resized = raster::resize(image, self.target_width)?;
        let gray = ascii::to_grayscale(&resized)?;
        ascii::render(&gray, &self.ramp)
    }

    /// Load an image file and convert it.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<AsciiArt> {
        let path = path.as_ref();
        let image = raster::load(path)?;
        let art = self.convert_image(&image)?;

        log::info!(
            "Converted {} ({}x{}) to {}x{} characters",
            path.display(),
            image.width(),
            image.height(),
            art.width(),
            art.height()
        );

        Ok(art)
    }

    /// Convert a file and write the art, followed by a newline, to `out`.
    ///
    /// Nothing is written unless every stage succeeds.
    pub fn run<P: AsRef<Path>, W: Write>(&self, path: P, out: &mut W) -> Result<()> {
        let art = self.convert_file(path)?;
        writeln!(out, "{}", art)?;
        Ok(())
    }

    /// Convert several files, one at a time.
    ///
    /// Stops at the first failure.
    pub fn convert_batch<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<AsciiArt>> {
        paths.iter().map(|p| self.convert_file(p)).collect()
    }

    /// Convert several files and write them separated by a blank line.
    ///
    /// All images are converted before anything is written, so a failure on
    /// any of them leaves `out` untouched.
    pub fn run_batch<P: AsRef<Path>, W: Write>(&self, paths: &[P], out: &mut W) -> Result<()> {
        let arts = self.convert_batch(paths)?;
        write_arts(&arts, out)
    }
}

/// Write each art followed by a newline, with a blank line between them.
pub fn write_arts<W: Write>(arts: &[AsciiArt], out: &mut W) -> Result<()> {
    for (i, art) in arts.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", art)?;
    }
    out.flush()?;
    Ok(())
}
