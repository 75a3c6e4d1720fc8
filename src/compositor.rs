// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Canvas compositing
//!
//! Every frame of an animation is pasted onto a canvas of the same
//! size, so the frames have to agree on where the character stands.
//! Vertically the sprite keeps the row it had in the strip.
//! Horizontally there are two policies: "body" centers the whole
//! sprite, which makes the character swim when an arm swings out;
//! "face" pins the head instead, estimated as the alpha-weighted
//! centroid of the top fifth of the sprite.
//!
//! Neither axis is clamped.  Content pushed past the canvas edge is
//! simply lost.

use crate::frame::{content_bounds, crop, Bounds};
use crate::profile::alpha;
use image::{GenericImageView, Rgba, RgbaImage};
use std::fmt;
use std::str::FromStr;

/// Output canvases are square, this many pixels on a side.
pub const CANVAS_SIZE: u32 = 1024;

/// Portion of the sprite's height, from the top, searched for a face.
pub const FACE_SLICE_FRACTION: f64 = 0.2;

/// Horizontal alignment policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Alignment {
    /// Lock the head's center of mass to the canvas midline.
    Face,
    /// Center the sprite's full width.
    Body,
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::Face
    }
}

impl FromStr for Alignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "face" => Ok(Alignment::Face),
            "body" => Ok(Alignment::Body),
            other => Err(format!("unknown alignment mode '{}'", other)),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Alignment::Face => write!(f, "face"),
            Alignment::Body => write!(f, "body"),
        }
    }
}

/// Where the sprite's top-left corner lands on the canvas.  Either
/// coordinate may be negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

/// The column of the sprite taken to be the middle of its face.
pub fn face_center_x<I>(sprite: &I) -> u32
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = sprite.dimensions();
    let scan_height = ((f64::from(height) * FACE_SLICE_FRACTION) as u32).max(1).min(height);
    let slice = crop(
        sprite,
        Bounds {
            x: 0,
            y: 0,
            width,
            height: scan_height,
        },
    );

    let bounds = match content_bounds(&slice) {
        Some(bounds) => bounds,
        None => return width / 2,
    };

    let weights: Vec<u64> = (0..width)
        .map(|x| {
            (0..scan_height)
                .map(|y| u64::from(alpha(slice.get_pixel(x, y))))
                .sum()
        })
        .collect();
    let total: u64 = weights.iter().sum();
    if total == 0 {
        return (bounds.x + bounds.right()) / 2;
    }
    let moment: u64 = weights
        .iter()
        .enumerate()
        .map(|(x, w)| x as u64 * w)
        .sum();
    (moment / total) as u32
}

/// Where the sprite goes horizontally under the given policy.
pub fn horizontal_offset<I>(sprite: &I, alignment: Alignment) -> i64
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let canvas = i64::from(CANVAS_SIZE);
    match alignment {
        Alignment::Body => (canvas - i64::from(sprite.width())).div_euclid(2),
        Alignment::Face => canvas / 2 - i64::from(face_center_x(sprite)),
    }
}

/// How many rows hang off the bottom of the canvas, if any.
pub fn vertical_overflow(placement: Placement, height: u32) -> Option<u32> {
    let bottom = placement.y + i64::from(height);
    let canvas = i64::from(CANVAS_SIZE);
    if bottom > canvas {
        Some((bottom - canvas) as u32)
    } else {
        None
    }
}

/// Paste the sprite onto a fresh transparent canvas.  Pixels are
/// copied, not blended; whatever falls outside the canvas is dropped.
pub fn composite<I>(sprite: &I, placement: Placement) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let mut canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
    let size = i64::from(CANVAS_SIZE);
    let (width, height) = sprite.dimensions();
    for y in 0..height {
        let cy = placement.y + i64::from(y);
        if cy < 0 || cy >= size {
            continue;
        }
        for x in 0..width {
            let cx = placement.x + i64::from(x);
            if cx < 0 || cx >= size {
                continue;
            }
            canvas.put_pixel(cx as u32, cy as u32, sprite.get_pixel(x, y));
        }
    }
    canvas
}
