// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors and diagnostics
//!
//! Only problems with the strip file itself stop a run.  Anything that
//! goes wrong with a single frame is a `Diagnostic`: it is logged,
//! handed back to the caller, and the remaining frames carry on.

use failure::Fail;
use std::fmt;
use std::path::Path;

/// Failures that abort the whole extraction.
#[derive(Debug, Fail)]
pub enum StripError {
    #[fail(display = "file not found at {}", _0)]
    InputNotFound(String),

    #[fail(display = "error opening image {}: {}", path, cause)]
    Decode {
        path: String,
        #[fail(cause)]
        cause: image::ImageError,
    },

    #[fail(display = "could not write {}: {}", path, reason)]
    Encode { path: String, reason: String },

    #[fail(display = "target frame count must be at least 1")]
    InvalidTargetCount,
}

impl StripError {
    pub fn not_found(path: &Path) -> Self {
        StripError::InputNotFound(path.display().to_string())
    }
}

/// Non-fatal conditions met while extracting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The blob's columns held no content at all.
    EmptyFrame { index: usize },
    /// Nothing survived island isolation.
    EmptyAfterIsolation { index: usize },
    /// The composited frame runs off the bottom of the canvas.
    Clipped { index: usize, overflow: u32 },
    /// Segmentation could not produce as many blobs as requested.
    InsufficientBlobs { found: usize, wanted: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::EmptyFrame { index } => write!(f, "Frame {} is empty", index),
            Diagnostic::EmptyAfterIsolation { index } => {
                write!(f, "Frame {} became empty after cleanup, skipping", index)
            }
            Diagnostic::Clipped { index, overflow } => {
                write!(f, "Frame {} clipped at bottom by {}px", index, overflow)
            }
            Diagnostic::InsufficientBlobs { found, wanted } => write!(
                f,
                "Found only {} of {} requested frames",
                found, wanted
            ),
        }
    }
}
