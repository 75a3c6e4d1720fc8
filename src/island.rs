// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Island isolation
//!
//! A cropped frame often drags along a stray hand, a particle, or a
//! sliver of the neighbouring sprite.  Group the opaque pixels into
//! 4-connected islands and keep only the biggest one.

use crate::profile::is_opaque;
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Rgba, RgbaImage};
use itertools::iproduct;

/// One 4-connected region of opaque pixels, as (x, y) coordinates.
pub type Island = Vec<(u32, u32)>;

// Flood fill from a seed with an explicit stack; large frames would
// blow the call stack if this recursed.
fn flood<I>(image: &I, visited: &mut TwoDimensionalMap<bool>, seed: (u32, u32)) -> Island
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let mut island = Vec::new();
    let mut stack = vec![seed];
    visited[seed] = true;
    while let Some((x, y)) = stack.pop() {
        island.push((x, y));
        let next: Vec<_> = visited
            .neighbors(x, y)
            .filter(|&(nx, ny)| !visited[(nx, ny)] && is_opaque(&image.get_pixel(nx, ny)))
            .collect();
        for point in next {
            visited[point] = true;
            stack.push(point);
        }
    }
    island
}

/// Every island in the image, in the order their first pixel is met
/// scanning row by row.
pub fn find_islands<I>(image: &I) -> Vec<Island>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let mut visited: TwoDimensionalMap<bool> = TwoDimensionalMap::new(width, height);
    let mut islands = Vec::new();
    for (y, x) in iproduct!(0..height, 0..width) {
        if !visited[(x, y)] && is_opaque(&image.get_pixel(x, y)) {
            islands.push(flood(image, &mut visited, (x, y)));
        }
    }
    islands
}

/// Return a copy of the image in which every pixel outside the
/// largest island has its alpha forced to zero.  On a tie the island
/// found first wins.  An image with no islands comes back unchanged.
pub fn keep_largest_island<I>(image: &I) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    let mut out = RgbaImage::from_fn(width, height, |x, y| image.get_pixel(x, y));

    let largest = find_islands(image)
        .into_iter()
        .fold(None, |best: Option<Island>, island| match best {
            Some(b) if b.len() >= island.len() => Some(b),
            _ => Some(island),
        });
    let largest = match largest {
        Some(island) => island,
        None => return out,
    };

    let mut keep: TwoDimensionalMap<bool> = TwoDimensionalMap::new(width, height);
    for point in largest {
        keep[point] = true;
    }
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if !keep[(x, y)] {
            pixel.channels_mut()[3] = 0;
        }
    }
    out
}
