// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Frames and bounding boxes
//!
//! A frame is the tight crop of one blob, plus the row at which its
//! content began in the strip, so that the sprite keeps its vertical
//! position on the output canvas.

use crate::blob::Blob;
use crate::profile::alpha;
use image::{GenericImageView, ImageBuffer, Rgba, RgbaImage};
use itertools::iproduct;

/// A rectangle in pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    /// One past the rightmost column.
    pub fn right(&self) -> u32 {
        self.x + self.width
    }
}

/// The smallest rectangle holding every pixel with any alpha at all.
/// `None` if the image is fully transparent.
pub fn content_bounds<I>(image: &I) -> Option<Bounds>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (width, height) = image.dimensions();
    iproduct!(0..height, 0..width)
        .filter(|&(y, x)| alpha(&image.get_pixel(x, y)) > 0)
        .fold(None, |acc: Option<(u32, u32, u32, u32)>, (y, x)| {
            Some(match acc {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            })
        })
        .map(|(x0, y0, x1, y1)| Bounds {
            x: x0,
            y: y0,
            width: x1 - x0 + 1,
            height: y1 - y0 + 1,
        })
}

/// Copy a rectangle out of an image into a new buffer.
pub fn crop<I>(image: &I, bounds: Bounds) -> RgbaImage
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    ImageBuffer::from_fn(bounds.width, bounds.height, |x, y| {
        image.get_pixel(bounds.x + x, bounds.y + y)
    })
}

/// One extracted sprite.
#[derive(Debug, Clone)]
pub struct Frame {
    pub image: RgbaImage,
    /// Row of the strip at which this frame's content begins.
    pub origin_y: u32,
}

impl Frame {
    /// Cut a blob's columns out of the strip, full height, then trim
    /// to the content.  `None` when there is nothing there.
    pub fn from_blob<I>(strip: &I, blob: &Blob) -> Option<Frame>
    where
        I: GenericImageView<Pixel = Rgba<u8>>,
    {
        let width = blob.end.min(strip.width()).saturating_sub(blob.start);
        if width == 0 {
            return None;
        }
        let column = crop(
            strip,
            Bounds {
                x: blob.start,
                y: 0,
                width,
                height: strip.height(),
            },
        );
        let bounds = content_bounds(&column)?;
        Some(Frame {
            image: crop(&column, bounds),
            origin_y: bounds.y,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Pixel;

    fn solid() -> Rgba<u8> {
        Rgba::from_channels(10, 20, 30, 255)
    }

    #[test]
    fn bounds_of_scattered_pixels() {
        let mut img = RgbaImage::new(10, 10);
        img.put_pixel(2, 3, solid());
        img.put_pixel(6, 8, Rgba::from_channels(0, 0, 0, 1));
        assert_eq!(
            content_bounds(&img),
            Some(Bounds {
                x: 2,
                y: 3,
                width: 5,
                height: 6
            })
        );
    }

    #[test]
    fn transparent_image_has_no_bounds() {
        assert_eq!(content_bounds(&RgbaImage::new(4, 4)), None);
    }

    #[test]
    fn frame_keeps_vertical_origin() {
        let mut strip = RgbaImage::new(20, 30);
        for y in 12..20 {
            for x in 5..9 {
                strip.put_pixel(x, y, solid());
            }
        }
        let frame = Frame::from_blob(&strip, &Blob::new(3, 10)).unwrap();
        assert_eq!(frame.origin_y, 12);
        assert_eq!(frame.dimensions(), (4, 8));
        assert_eq!(*frame.image.get_pixel(0, 0), solid());
    }

    #[test]
    fn zero_width_blob_is_empty() {
        let mut strip = RgbaImage::new(8, 8);
        strip.put_pixel(4, 4, solid());
        assert!(Frame::from_blob(&strip, &Blob::new(4, 4)).is_none());
    }
}
