//! Batch split of a folder by the confidence score embedded in each filename.

use super::{list_images, move_file};
use crate::error::{Result, SortError};
use std::fs;
use std::path::Path;

/// Sub-folder receiving files scoring above the threshold.
pub const BIGGER_DIR: &str = "bigger_confidence";
/// Sub-folder receiving everything else.
pub const SMALLER_DIR: &str = "smaller_confidence";
pub const DEFAULT_THRESHOLD: i64 = 50;

/// What to do with a filename that carries no parsable score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Stop at the first malformed filename; earlier moves stay done
    #[default]
    Abort,
    /// Leave the file in place, record it, keep going
    Skip,
}

/// Outcome of a classification run, file names in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyReport {
    pub bigger: Vec<String>,
    pub smaller: Vec<String>,
    pub malformed: Vec<String>,
}

/// Extracts the confidence score from a filename.
///
/// The score is the second-to-last dot-delimited field (`frame.87.jpg` -> 87).
/// When that field has an underscore-separated prefix, the part after the last
/// underscore is used (`b_60.png` -> 60).
pub fn parse_confidence(filename: &str) -> Result<i64> {
    let malformed = || SortError::MalformedFilename(filename.to_string());

    let mut fields = filename.rsplit('.');
    let _extension = fields.next();
    let field = fields.next().ok_or_else(malformed)?;
    let token = field.rsplit('_').next().unwrap_or(field);

    token.parse::<i64>().map_err(|_| malformed())
}

/// Moves every image in `directory` into [`BIGGER_DIR`] when its score is
/// strictly greater than `threshold`, else into [`SMALLER_DIR`].
///
/// Both sub-folders are created up front, even if nothing lands in them.
pub fn classify_by_threshold(
    directory: &Path,
    threshold: i64,
    policy: MalformedPolicy,
) -> Result<ClassifyReport> {
    let names = list_images(directory)?;

    let bigger_dir = directory.join(BIGGER_DIR);
    let smaller_dir = directory.join(SMALLER_DIR);
    for dir in [&bigger_dir, &smaller_dir] {
        fs::create_dir_all(dir).map_err(|e| SortError::from_file_io(e, dir))?;
    }

    let mut report = ClassifyReport::default();

    for name in names {
        let score = match parse_confidence(&name) {
            Ok(score) => score,
            Err(e) => match policy {
                MalformedPolicy::Abort => return Err(e),
                MalformedPolicy::Skip => {
                    tracing::warn!(file = %name, "skipping file without confidence score");
                    report.malformed.push(name);
                    continue;
                }
            },
        };

        if score > threshold {
            move_file(directory, &bigger_dir, &name)?;
            report.bigger.push(name);
        } else {
            move_file(directory, &smaller_dir, &name)?;
            report.smaller.push(name);
        }
    }

    tracing::info!(
        dir = %directory.display(),
        threshold,
        bigger = report.bigger.len(),
        smaller = report.smaller.len(),
        malformed = report.malformed.len(),
        "classification finished"
    );
    Ok(report)
}
