//! img2ascii library crate.
//!
//! Converts raster images into brightness-mapped ASCII art:
//! load, resize, grayscale, map.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod raster;

pub use error::{ConvertError, Result};
pub use pipeline::Pipeline;
