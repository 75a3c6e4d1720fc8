// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Column opacity profile
//!
//! For every column of a strip, count the pixels that are solid
//! enough to be part of a sprite.  Faint antialiasing and compression
//! noise (alpha of 10 or less) doesn't count.

use image::{GenericImageView, Pixel, Rgba};
use itertools::iproduct;

/// Pixels at or below this alpha are treated as background noise.
pub const ALPHA_THRESHOLD: u8 = 10;

/// The alpha channel of a pixel.
#[inline]
pub fn alpha(p: &Rgba<u8>) -> u8 {
    p.channels()[3]
}

/// True if the pixel is solid enough to count as sprite content.
#[inline]
pub fn is_opaque(p: &Rgba<u8>) -> bool {
    alpha(p) > ALPHA_THRESHOLD
}

/// One count per column: the number of opaque pixels in that column.
pub type ColumnProfile = Vec<u32>;

/// Image -> Column Profile
pub fn column_profile<I>(image: &I) -> ColumnProfile
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let mut profile = vec![0; width as usize];
    iproduct!(0..height, 0..width)
        .filter(|&(y, x)| is_opaque(&image.get_pixel(x, y)))
        .for_each(|(_, x)| profile[x as usize] += 1);
    profile
}
