//! imgsort - sort a folder of images by hand, or by the score in their names
//!
//! The interactive side walks a [`Cursor`] over the images of a source
//! directory and moves each into `pos`/`neg` sub-folders or deletes it.
//! The batch side splits a directory by the confidence score each filename
//! carries.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod preview;
pub mod session;
pub mod tui;

// Re-export primary types for convenience
pub use config::DirConfig;
pub use domain::{
    classify_by_threshold, delete_file, list_images, move_file, parse_confidence, ClassifyReport,
    Cursor, CursorState, DeleteMode, MalformedPolicy,
};
pub use error::{Result, SortError};
pub use preview::{render, Rendered};
pub use session::{Session, SessionStats, Verdict, View};
