// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Blob segmentation
//!
//! Turn a column profile into column ranges, one per hypothesized
//! sprite.  Runs of non-empty columns become the initial blobs; if
//! the artist let two figures touch, there will be fewer blobs than
//! frames, so the widest blob is repeatedly cut at its weakest column
//! until the count is reached.

use crate::profile::ColumnProfile;
use log::debug;
use std::cmp::Reverse;

/// A half-open column range `[start, end)` of the strip.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Blob {
    pub start: u32,
    pub end: u32,
}

impl Blob {
    pub fn new(start: u32, end: u32) -> Self {
        Blob { start, end }
    }

    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }
}

/// Profile -> Blobs
///
/// Run-length detection over "does this column have any content?"
/// A run still open at the right edge ends at the strip's width.
pub fn segment(profile: &[u32]) -> Vec<Blob> {
    let mut blobs = Vec::new();
    let mut open: Option<u32> = None;
    for (x, &count) in profile.iter().enumerate() {
        let x = x as u32;
        match (count > 0, open) {
            (true, None) => open = Some(x),
            (false, Some(start)) => {
                blobs.push(Blob::new(start, x));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        blobs.push(Blob::new(start, profile.len() as u32));
    }
    blobs
}

// Search the middle half of the blob for the column with the least
// content.  On a tie the leftmost column wins.  A blob too narrow to
// have a middle half is cut at its midpoint.
fn split_point(blob: &Blob, profile: &[u32]) -> u32 {
    let width = blob.width();
    let search_start = blob.start + width / 4;
    let search_end = blob.start + ((u64::from(width) * 3) / 4) as u32;
    let split = (search_start..search_end)
        .min_by_key(|&x| profile.get(x as usize).copied().unwrap_or(0))
        .unwrap_or(blob.start + width / 2);
    debug!(
        "Splitting [{}, {}) in window [{}, {}) at column {}",
        blob.start, blob.end, search_start, search_end, split
    );
    split
}

/// Repeatedly bisect the widest blob until there are at least
/// `target` of them.
///
/// The column at the split point belongs to neither half: it becomes
/// a one-pixel gap between the two new frames.  Gives up, returning
/// fewer than `target` blobs, only when there is nothing to split.
pub fn split_to_count(mut blobs: Vec<Blob>, profile: &[u32], target: usize) -> Vec<Blob> {
    while blobs.len() < target {
        // min_by_key returns the first of equals, so the earliest of
        // the widest blobs is the one chosen.
        let widest = match blobs
            .iter()
            .enumerate()
            .min_by_key(|(_, b)| Reverse(b.width()))
        {
            Some((index, _)) => index,
            None => break,
        };

        let blob = blobs[widest];
        let split = split_point(&blob, profile);
        let right_start = split + 1;
        blobs[widest] = Blob::new(blob.start, split);
        blobs.insert(widest + 1, Blob::new(right_start, blob.end.max(right_start)));

        // Later width comparisons break ties by scan order, so the
        // sequence must stay sorted by start column.
        blobs.sort_by_key(|b| b.start);
    }
    blobs
}

/// Segment a profile and split it toward `target` blobs.
pub fn find_blobs(profile: &ColumnProfile, target: usize) -> Vec<Blob> {
    split_to_count(segment(profile), profile, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(blobs: &[Blob]) -> Vec<(u32, u32)> {
        blobs.iter().map(|b| (b.start, b.end)).collect()
    }

    #[test]
    fn segments_runs_of_content() {
        let profile = [0, 3, 4, 0, 0, 1, 0, 2, 2];
        assert_eq!(ranges(&segment(&profile)), vec![(1, 3), (5, 6), (7, 9)]);
    }

    #[test]
    fn empty_profile_has_no_blobs() {
        assert!(segment(&[0, 0, 0, 0]).is_empty());
        assert!(segment(&[]).is_empty());
    }

    #[test]
    fn single_region_with_target_one_is_tight() {
        let profile = [0, 0, 5, 7, 7, 1, 0, 0];
        let blobs = find_blobs(&profile.to_vec(), 1);
        assert_eq!(ranges(&blobs), vec![(2, 6)]);
    }

    #[test]
    fn splits_at_weakest_column_and_drops_it() {
        let profile = vec![5, 5, 5, 1, 5, 5, 5, 5];
        let blobs = find_blobs(&profile, 2);
        assert_eq!(ranges(&blobs), vec![(0, 3), (4, 8)]);
    }

    #[test]
    fn weakest_column_ties_go_left() {
        let profile = vec![9, 9, 2, 9, 9, 2, 9, 9];
        let blobs = find_blobs(&profile, 2);
        assert_eq!(ranges(&blobs), vec![(0, 2), (3, 8)]);
    }

    #[test]
    fn narrow_blob_splits_at_midpoint() {
        let blobs = split_to_count(vec![Blob::new(4, 5)], &[0, 0, 0, 0, 1], 2);
        assert_eq!(ranges(&blobs), vec![(4, 4), (5, 5)]);
    }

    #[test]
    fn keeps_extra_blobs() {
        let profile = vec![1, 0, 1, 0, 1];
        assert_eq!(find_blobs(&profile, 2).len(), 3);
    }

    #[test]
    fn transparent_strip_cannot_reach_target() {
        assert!(find_blobs(&vec![0; 64], 5).is_empty());
    }

    #[test]
    fn widest_blob_is_split_repeatedly() {
        let mut profile = vec![0u32; 900];
        for x in (0..100).chain(300..500).chain(700..900) {
            profile[x] = 200;
        }
        let blobs = find_blobs(&profile, 9);
        assert_eq!(
            ranges(&blobs),
            vec![
                (0, 100),
                (300, 350),
                (351, 388),
                (389, 416),
                (417, 500),
                (700, 750),
                (751, 788),
                (789, 816),
                (817, 900),
            ]
        );
    }

    #[test]
    fn degenerate_blobs_still_terminate() {
        let blobs = find_blobs(&vec![1], 6);
        assert_eq!(blobs.len(), 6);
        assert!(blobs.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
