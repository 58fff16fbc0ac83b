//! Image file loading.

use std::path::Path;

use crate::error::{ConvertError, Result};

use super::Image;

/// Load and decode an image file.
///
/// The format is detected from the file contents, falling back to the
/// extension. Any decoding failure, including a missing file, is reported
/// as [`ConvertError::Load`].
pub fn load<P: AsRef<Path>>(path: P) -> Result<Image> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| ConvertError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Loaded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    Ok(Image::from_dynamic(&img))
}
