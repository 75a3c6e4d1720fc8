// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Output file naming
//!
//! `Hero_Walk_Strip.png` becomes `hero_walk_000.png`,
//! `hero_walk_001.png`, and so on, next to the strip.

use std::path::{Path, PathBuf};

/// Suffix conventionally carried by strip files, dropped from the
/// base name.
pub const STRIP_SUFFIX: &str = "_Strip";

/// The base name for a strip's frames: the override if there is one,
/// otherwise the file stem minus any `_Strip` suffix.
pub fn base_name(input: &Path, name_override: Option<&str>) -> String {
    if let Some(name) = name_override {
        return name.to_string();
    }
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_suffix(STRIP_SUFFIX) {
        Some(trimmed) => trimmed.to_string(),
        None => stem,
    }
}

/// `base_NNN.png`, lowercased, numbered from `start_index`.
pub fn output_filename(base: &str, index: usize, start_index: usize) -> String {
    format!("{}_{:03}.png", base, index + start_index).to_lowercase()
}

/// The directory holding the strip, where frames are written by
/// default.
pub fn output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_suffix_is_removed() {
        assert_eq!(base_name(Path::new("art/Hero_Walk_Strip.png"), None), "Hero_Walk");
        assert_eq!(base_name(Path::new("art/Hero_Walk.png"), None), "Hero_Walk");
        assert_eq!(base_name(Path::new("hero_strip.png"), None), "hero_strip");
    }

    #[test]
    fn override_wins() {
        assert_eq!(base_name(Path::new("a/Hero_Strip.png"), Some("fok")), "fok");
    }

    #[test]
    fn filenames_are_padded_and_lowercased() {
        assert_eq!(output_filename("Hero_Walk", 0, 0), "hero_walk_000.png");
        assert_eq!(output_filename("Hero", 3, 10), "hero_013.png");
        assert_eq!(output_filename("x", 1200, 0), "x_1200.png");
    }

    #[test]
    fn bare_filename_writes_to_current_dir() {
        assert_eq!(output_dir(Path::new("strip.png")), PathBuf::from("."));
        assert_eq!(output_dir(Path::new("a/b/strip.png")), PathBuf::from("a/b"));
    }
}
