//! ASCII renderer: turns images into brightness-mapped text.
//!
//! The stages run in a fixed order:
//!
//! 1. **Dimension calculation** - target grid size, corrected for glyph aspect
//! 2. **Grayscale conversion** - RGB to luminance using BT.601
//! 3. **Character mapping** - brightness buckets onto a [`Ramp`], split into rows
//!
//! Resampling itself lives in [`crate::raster`].

mod charset;
mod dimensions;
mod grayscale;
mod mapping;

pub use charset::{Ramp, BUCKET_WIDTH, RAMP_LEVELS, STANDARD_CHARSET};
pub use dimensions::{
    calculate_dimensions, calculate_dimensions_with_aspect, DEFAULT_CHAR_ASPECT_RATIO,
    DEFAULT_TARGET_WIDTH,
};
pub use grayscale::{luma, to_grayscale};
pub use mapping::{map_to_chars, render, split_rows, AsciiArt};
