use super::list_images;
use crate::error::Result;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Whether the cursor currently points at anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// No candidates, so no current item
    Empty,
    /// At least one candidate and a position
    Positioned,
}

/// Position over the sorted image names of one directory.
///
/// The candidate list is never patched in place: after anything moves or
/// removes a file, callers call [`Cursor::load`] again with the old position
/// and the list is re-derived from disk.
#[derive(Debug, Default)]
pub struct Cursor {
    directory: Option<PathBuf>,
    candidates: Vec<String>,
    /// `None` iff `candidates` is empty. May exceed the last index after a
    /// reload that shrank the list; `current()` clamps lazily.
    position: Option<usize>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-lists `directory` and positions the cursor.
    ///
    /// `keep_position` is stored as given, without bounds checking. On error the
    /// cursor is left untouched.
    pub fn load(&mut self, directory: &Path, keep_position: Option<usize>) -> Result<()> {
        let candidates = list_images(directory)?;

        self.directory = Some(directory.to_path_buf());
        self.position = if candidates.is_empty() {
            None
        } else {
            Some(keep_position.unwrap_or(0))
        };
        self.candidates = candidates;
        Ok(())
    }

    /// Forgets the directory and its candidates.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Re-lists `directory` and jumps to a uniformly random candidate.
    pub fn reseed<R: Rng>(&mut self, directory: &Path, rng: &mut R) -> Result<()> {
        self.load(directory, None)?;
        if !self.candidates.is_empty() {
            self.position = Some(rng.random_range(0..self.candidates.len()));
        }
        Ok(())
    }

    /// The current file name, or `None` when there are no candidates.
    ///
    /// A position past the end resolves to the last candidate.
    pub fn current(&self) -> Option<&str> {
        let position = self.position?;
        match self.candidates.get(position) {
            Some(name) => Some(name.as_str()),
            None => {
                let last = self.candidates.last()?;
                tracing::warn!(
                    position,
                    len = self.candidates.len(),
                    "cursor position past end, showing last candidate"
                );
                Some(last.as_str())
            }
        }
    }

    pub fn next(&mut self) {
        if let Some(position) = self.position {
            if position + 1 < self.candidates.len() {
                self.position = Some(position + 1);
            }
        }
    }

    pub fn prev(&mut self) {
        if let Some(position) = self.position {
            if position > 0 {
                self.position = Some(position - 1);
            }
        }
    }

    /// Raw position, used to re-anchor after a move or delete.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn state(&self) -> CursorState {
        match self.position {
            Some(_) => CursorState::Positioned,
            None => CursorState::Empty,
        }
    }

    /// True when `current()` is clamping a stale position.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.position, Some(p) if p >= self.candidates.len())
    }

    /// `None` until the first successful `load`.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
