//! Candidate discovery: which files in a directory are sortable images.

pub mod classify;
pub mod cursor;
pub mod file_ops;

pub use classify::{classify_by_threshold, parse_confidence, ClassifyReport, MalformedPolicy};
pub use cursor::{Cursor, CursorState};
pub use file_ops::{delete_file, move_file, DeleteMode};

use crate::error::{Result, SortError};
use std::fs;
use std::path::Path;

/// Extensions (lower-case, without the dot) treated as images.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Returns true if the file name carries a recognized image extension.
///
/// The comparison is case-insensitive, so `IMG_0001.JPG` qualifies.
pub fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Lists the image files directly inside `dir`, sorted by name.
///
/// # Returns
/// * `Ok(Vec<String>)` - bare file names, ascending
/// * `Err(SortError::DirectoryNotFound)` - if the directory is missing or unreadable
///
/// # Behavior
/// - Does not recurse into subdirectories
/// - Skips directories even when their name looks like an image
/// - Skips entries whose name is not valid UTF-8 or whose metadata cannot be read
pub fn list_images(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| SortError::from_dir_io(e, dir))?;

    let mut names = Vec::new();
    for entry_result in entries {
        let entry = match entry_result {
            Ok(e) => e,
            Err(_) => continue,
        };

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(_) => continue,
        };

        if !is_image_name(&name) {
            continue;
        }

        // Follows symlinks, so a link to an image counts as a candidate
        match fs::metadata(entry.path()) {
            Ok(m) if m.is_file() => names.push(name),
            _ => continue,
        }
    }

    names.sort();
    tracing::debug!(dir = %dir.display(), count = names.len(), "listed images");
    Ok(names)
}
