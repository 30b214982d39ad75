use crate::error::{Result, SortError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// How `delete_file` disposes of a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteMode {
    /// Unlink the file
    #[default]
    Remove,
    /// Hand the file to the platform trash
    Trash,
}

/// Moves `src_dir/filename` to `dst_dir/filename`, creating `dst_dir` first.
///
/// Never overwrites: an existing file at the destination is reported as
/// [`SortError::DestinationConflict`] and the source stays where it was.
/// Returns the destination path.
pub fn move_file(src_dir: &Path, dst_dir: &Path, filename: &str) -> Result<PathBuf> {
    let src = src_dir.join(filename);
    let dst = dst_dir.join(filename);

    if !src.is_file() {
        return Err(SortError::SourceNotFound(src));
    }

    fs::create_dir_all(dst_dir).map_err(|e| SortError::from_file_io(e, dst_dir))?;

    if dst.exists() {
        return Err(SortError::DestinationConflict(dst));
    }

    match fs::rename(&src, &dst) {
        Ok(()) => {
            tracing::info!(src = %src.display(), dst = %dst.display(), "moved file");
        }
        Err(e) if matches!(
            e.kind(),
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
        ) =>
        {
            return Err(SortError::from_file_io(e, &src));
        }
        Err(e) => {
            // Typically a cross-device rename
            tracing::warn!(error = %e, "rename failed, falling back to copy+remove");
            copy_then_remove(&src, &dst)?;
            tracing::info!(src = %src.display(), dst = %dst.display(), "copied and removed file");
        }
    }

    Ok(dst)
}

fn copy_then_remove(src: &Path, dst: &Path) -> Result<()> {
    if let Err(e) = fs::copy(src, dst) {
        // A copy that fails midway leaves a truncated file
        fs::remove_file(dst).ok();
        return Err(SortError::from_file_io(e, src));
    }
    if let Err(e) = fs::remove_file(src) {
        // Leave a single copy behind rather than two
        fs::remove_file(dst).ok();
        return Err(SortError::from_file_io(e, src));
    }
    Ok(())
}

/// Deletes `directory/filename` according to `mode`.
pub fn delete_file(directory: &Path, filename: &str, mode: DeleteMode) -> Result<()> {
    let path = directory.join(filename);

    if !path.is_file() {
        return Err(SortError::SourceNotFound(path));
    }

    match mode {
        DeleteMode::Remove => {
            fs::remove_file(&path).map_err(|e| SortError::from_file_io(e, &path))?;
        }
        DeleteMode::Trash => {
            trash::delete(&path).map_err(|e| SortError::Trash(e.to_string()))?;
        }
    }

    tracing::info!(path = %path.display(), ?mode, "deleted file");
    Ok(())
}
