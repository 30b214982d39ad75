// CLI module for argument parsing and configuration

use crate::config::DEFAULT_CONFIG_FILE;
use crate::domain::classify::DEFAULT_THRESHOLD;
use crate::domain::{DeleteMode, MalformedPolicy};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// imgsort - sort a folder of images into pos/neg by hand
///
/// Browse the images of the source directory one at a time and move each into
/// DST/pos or DST/neg, or delete it.
#[derive(Parser, Debug, Clone)]
#[command(name = "imgsort")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file remembering the source and destination directories
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Source directory (overrides and updates the config file)
    #[arg(long = "src")]
    pub src_dir: Option<PathBuf>,

    /// Destination directory (overrides and updates the config file)
    #[arg(long = "dst")]
    pub dst_dir: Option<PathBuf>,

    /// Send deleted images to the system trash instead of removing them
    #[arg(long = "trash", action = ArgAction::SetTrue)]
    pub trash: bool,

    /// Skip the confirmation dialog before deleting
    #[arg(short = 'y', long = "yes", action = ArgAction::SetTrue)]
    pub skip_confirm: bool,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    pub fn delete_mode(&self) -> DeleteMode {
        if self.trash {
            DeleteMode::Trash
        } else {
            DeleteMode::Remove
        }
    }

    /// Validate the arguments and return any errors
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref src) = self.src_dir {
            if !src.is_dir() {
                return Err(format!("Source is not a directory: {}", src.display()));
            }
        }

        if self.config.is_dir() {
            return Err(format!(
                "Config path is a directory: {}",
                self.config.display()
            ));
        }

        Ok(())
    }
}

/// classify - split a folder by the confidence score in each filename
///
/// Files named like `name_87.jpg` or `name.87.jpg` whose score is above the
/// threshold go to DIR/bigger_confidence, the rest to DIR/smaller_confidence.
#[derive(Parser, Debug, Clone)]
#[command(name = "classify")]
#[command(author, version, about, long_about = None)]
pub struct ClassifyArgs {
    /// Directory to classify
    pub directory: PathBuf,

    /// Scores strictly above this go to bigger_confidence
    #[arg(short = 't', long = "threshold", default_value_t = DEFAULT_THRESHOLD, allow_negative_numbers = true)]
    pub threshold: i64,

    /// Report files without a score and continue instead of stopping
    #[arg(long = "skip-malformed", action = ArgAction::SetTrue)]
    pub skip_malformed: bool,
}

impl ClassifyArgs {
    pub fn policy(&self) -> MalformedPolicy {
        if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            MalformedPolicy::Abort
        }
    }
}
