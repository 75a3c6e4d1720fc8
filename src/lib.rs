// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Cut a horizontal sprite strip into frames using nothing but its
//! alpha channel, and composite each frame onto a fixed-size canvas.

pub mod blob;
pub mod codec;
pub mod compositor;
pub mod errors;
pub mod extractor;
pub mod frame;
pub mod island;
pub mod naming;
pub mod profile;
pub mod twodmap;

pub use compositor::{Alignment, CANVAS_SIZE};
pub use errors::{Diagnostic, StripError};
pub use extractor::{segment_and_composite, ExtractOptions, ExtractedFrame, Extraction, StripExtractor};
