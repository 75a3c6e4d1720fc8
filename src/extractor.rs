// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Extract - The main function
//!
//! Profile the strip, find one blob per frame, then isolate and
//! composite each frame onto its own canvas.  No file I/O happens
//! here; the caller decodes the strip and saves the canvases.

use crate::blob::{segment, split_to_count, Blob};
use crate::compositor::{composite, horizontal_offset, vertical_overflow, Alignment, Placement};
use crate::errors::{Diagnostic, StripError};
use crate::frame::{content_bounds, crop, Frame};
use crate::island::keep_largest_island;
use crate::profile::column_profile;
use image::{GenericImageView, Rgba, RgbaImage};
use log::{info, warn};

/// What to extract and how to line it up.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub target_count: usize,
    pub alignment: Alignment,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            target_count: 9,
            alignment: Alignment::Face,
        }
    }
}

/// One frame, composited and ready to encode.
#[derive(Debug, Clone)]
pub struct ExtractedFrame {
    /// Position of the frame's blob in the strip, counting skipped
    /// frames, so output numbering stays stable.
    pub index: usize,
    pub canvas: RgbaImage,
    pub width: u32,
    pub height: u32,
    pub placement: Placement,
    pub diagnostics: Vec<Diagnostic>,
}

/// Everything a strip produced.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub frames: Vec<ExtractedFrame>,
    /// Strip-level diagnostics and those for skipped frames.
    pub diagnostics: Vec<Diagnostic>,
}

// Isolate a single cropped frame, re-trim it, and paste it onto a
// canvas.  An Err here means the frame is skipped.
fn finish_frame(index: usize, frame: &Frame, alignment: Alignment) -> Result<ExtractedFrame, Diagnostic> {
    let cleaned = keep_largest_island(&frame.image);
    let bounds = content_bounds(&cleaned).ok_or(Diagnostic::EmptyAfterIsolation { index })?;
    let sprite = crop(&cleaned, bounds);
    let (width, height) = sprite.dimensions();

    let placement = Placement {
        x: horizontal_offset(&sprite, alignment),
        y: i64::from(frame.origin_y) + i64::from(bounds.y),
    };
    let diagnostics = vertical_overflow(placement, height)
        .map(|overflow| Diagnostic::Clipped { index, overflow })
        .into_iter()
        .collect();

    Ok(ExtractedFrame {
        index,
        canvas: composite(&sprite, placement),
        width,
        height,
        placement,
        diagnostics,
    })
}

#[cfg(not(feature = "threaded"))]
fn finish_frames(
    frames: &[(usize, Frame)],
    alignment: Alignment,
) -> Vec<Result<ExtractedFrame, Diagnostic>> {
    frames
        .iter()
        .map(|(index, frame)| finish_frame(*index, frame, alignment))
        .collect()
}

// Frames share nothing once cropped, so hand each CPU a contiguous
// chunk and stitch the results back together in order.
#[cfg(feature = "threaded")]
fn finish_frames(
    frames: &[(usize, Frame)],
    alignment: Alignment,
) -> Vec<Result<ExtractedFrame, Diagnostic>> {
    if frames.is_empty() {
        return Vec::new();
    }
    let chunk_size = (frames.len() + num_cpus::get() - 1) / num_cpus::get();
    crossbeam::scope(|scope| {
        let handles: Vec<_> = frames
            .chunks(chunk_size.max(1))
            .map(|chunk| {
                scope.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|(index, frame)| finish_frame(*index, frame, alignment))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
            .collect()
    })
    .unwrap_or_else(|e| std::panic::resume_unwind(e))
}

/// Holds the strip to be cut up.
pub struct StripExtractor<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    strip: &'a I,
}

impl<'a, I> StripExtractor<'a, I>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    pub fn new(strip: &'a I) -> Self {
        Self { strip }
    }

    /// The column ranges that will become frames, at most
    /// `target_count` of them.
    pub fn blobs(&self, target_count: usize) -> (Vec<Blob>, Option<Diagnostic>) {
        let profile = column_profile(self.strip);
        let initial = segment(&profile);
        info!("Initially detected {} sprites.", initial.len());
        let mut blobs = split_to_count(initial, &profile, target_count);
        let shortfall = if blobs.len() < target_count {
            Some(Diagnostic::InsufficientBlobs {
                found: blobs.len(),
                wanted: target_count,
            })
        } else {
            None
        };
        blobs.truncate(target_count);
        (blobs, shortfall)
    }

    /// Cut the strip into frames and composite each one.
    pub fn extract(&self, options: &ExtractOptions) -> Result<Extraction, StripError> {
        if options.target_count == 0 {
            return Err(StripError::InvalidTargetCount);
        }
        let (width, height) = self.strip.dimensions();
        info!("Processing strip: {}x{}", width, height);

        let mut extraction = Extraction::default();
        let (blobs, shortfall) = self.blobs(options.target_count);
        extraction.diagnostics.extend(shortfall);

        let mut cropped = Vec::with_capacity(blobs.len());
        let mut skipped = Vec::new();
        for (index, blob) in blobs.iter().enumerate() {
            match Frame::from_blob(self.strip, blob) {
                Some(frame) => cropped.push((index, frame)),
                None => skipped.push(Diagnostic::EmptyFrame { index }),
            }
        }

        let mut finished = finish_frames(&cropped, options.alignment).into_iter();
        let mut skipped = skipped.into_iter().peekable();
        // Interleave so diagnostics come out in blob order.
        for index in 0..blobs.len() {
            if let Some(Diagnostic::EmptyFrame { index: i }) = skipped.peek() {
                if *i == index {
                    extraction.diagnostics.extend(skipped.next());
                    continue;
                }
            }
            match finished.next() {
                Some(Ok(frame)) => extraction.frames.push(frame),
                Some(Err(diagnostic)) => extraction.diagnostics.push(diagnostic),
                None => break,
            }
        }

        for diagnostic in &extraction.diagnostics {
            warn!("{}", diagnostic);
        }
        for diagnostic in extraction.frames.iter().flat_map(|f| &f.diagnostics) {
            warn!("{}", diagnostic);
        }
        Ok(extraction)
    }
}

/// Strip in, canvases out.
pub fn segment_and_composite<I>(strip: &I, options: &ExtractOptions) -> Result<Extraction, StripError>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    StripExtractor::new(strip).extract(options)
}
