//! Error types shared by the library and both binaries

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("Directory not found or unreadable: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Destination already exists: {}", .0.display())]
    DestinationConflict(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Cannot decode image {}: {message}", path.display())]
    ImageDecode { path: PathBuf, message: String },

    #[error("No confidence score in filename: {0}")]
    MalformedFilename(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Trash error: {0}")]
    Trash(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SortError>;

impl SortError {
    /// Maps an I/O failure on a file to the matching variant.
    pub(crate) fn from_file_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => SortError::SourceNotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => SortError::PermissionDenied(path.to_path_buf()),
            _ => SortError::Io(err),
        }
    }

    /// Any failure to open a directory for listing is reported the same way.
    pub(crate) fn from_dir_io(err: io::Error, path: &Path) -> Self {
        tracing::debug!(dir = %path.display(), error = %err, "cannot read directory");
        SortError::DirectoryNotFound(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_io_not_found_maps_to_source_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let mapped = SortError::from_file_io(err, Path::new("/tmp/x.jpg"));
        assert!(matches!(mapped, SortError::SourceNotFound(p) if p == Path::new("/tmp/x.jpg")));
    }

    #[test]
    fn test_file_io_permission_maps_to_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        let mapped = SortError::from_file_io(err, Path::new("/tmp/x.jpg"));
        assert!(matches!(mapped, SortError::PermissionDenied(_)));
    }

    #[test]
    fn test_file_io_other_stays_io() {
        let err = io::Error::other("disk on fire");
        let mapped = SortError::from_file_io(err, Path::new("/tmp/x.jpg"));
        assert!(matches!(mapped, SortError::Io(_)));
    }

    #[test]
    fn test_dir_io_maps_to_directory_not_found() {
        for kind in [io::ErrorKind::NotFound, io::ErrorKind::PermissionDenied] {
            let mapped = SortError::from_dir_io(io::Error::new(kind, "x"), Path::new("/nope"));
            assert!(matches!(mapped, SortError::DirectoryNotFound(_)));
            assert!(mapped.to_string().contains("/nope"));
        }
    }
}
