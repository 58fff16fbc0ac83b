//! In-memory raster images: loading, the pixel model, and resizing.

mod loader;
mod resize;
mod types;

pub use loader::load;
pub use resize::{resize, resize_with_aspect};
pub use types::{Image, Pixel, PixelFormat};
