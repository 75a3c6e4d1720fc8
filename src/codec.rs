// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Loading strips and saving frames.

use crate::errors::StripError;
use image::RgbaImage;
use std::path::Path;

/// Decode any image the `image` crate understands, forcing an alpha
/// channel onto it.
pub fn load_strip(path: &Path) -> Result<RgbaImage, StripError> {
    if !path.is_file() {
        return Err(StripError::not_found(path));
    }
    let image = image::open(path).map_err(|cause| StripError::Decode {
        path: path.display().to_string(),
        cause,
    })?;
    Ok(image.to_rgba())
}

/// Write a canvas out as a PNG.
pub fn save_canvas(canvas: &RgbaImage, path: &Path) -> Result<(), StripError> {
    canvas.save(path).map_err(|e| StripError::Encode {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}
