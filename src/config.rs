//! Persisted source/destination directories

use crate::error::{Result, SortError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dir_config.yaml";

fn root_dir() -> PathBuf {
    PathBuf::from("/")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirConfig {
    /// Directory whose images are being sorted
    #[serde(default = "root_dir")]
    pub src_dir: PathBuf,
    /// Directory receiving the `pos`/`neg` sub-folders
    #[serde(default = "root_dir")]
    pub dst_dir: PathBuf,
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            src_dir: root_dir(),
            dst_dir: root_dir(),
        }
    }
}

impl DirConfig {
    /// Load config from `path`, or the defaults if the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| SortError::Config(format!("Failed to read config file: {}", e)))?;

        // An empty document is valid YAML but deserializes to unit
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents)
            .map_err(|e| SortError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Overwrite `path` with this config
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                SortError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_yaml::to_string(self)
            .map_err(|e| SortError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)
            .map_err(|e| SortError::Config(format!("Failed to write config file: {}", e)))?;

        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = DirConfig::default();
        assert_eq!(config.src_dir, PathBuf::from("/"));
        assert_eq!(config.dst_dir, PathBuf::from("/"));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = DirConfig::load(&temp_dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, DirConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(DEFAULT_CONFIG_FILE);
        let config = DirConfig {
            src_dir: PathBuf::from("/data/incoming"),
            dst_dir: PathBuf::from("/data/sorted"),
        };

        config.save(&path).unwrap();
        let loaded = DirConfig::load(&path).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_reads_flat_key_value_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "dst_dir: /out\nsrc_dir: /in\n").unwrap();

        let config = DirConfig::load(&path).unwrap();

        assert_eq!(config.src_dir, PathBuf::from("/in"));
        assert_eq!(config.dst_dir, PathBuf::from("/out"));
    }

    #[test]
    fn test_written_document_has_both_keys() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);

        DirConfig::default().save(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert!(written.contains("src_dir:"));
        assert!(written.contains("dst_dir:"));
    }

    #[test]
    fn test_missing_field_defaults_to_root() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "src_dir: /only/src\n").unwrap();

        let config = DirConfig::load(&path).unwrap();

        assert_eq!(config.src_dir, PathBuf::from("/only/src"));
        assert_eq!(config.dst_dir, PathBuf::from("/"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "").unwrap();

        assert_eq!(DirConfig::load(&path).unwrap(), DirConfig::default());
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "src_dir: [unterminated\n").unwrap();

        let result = DirConfig::load(&path);

        assert!(matches!(result, Err(SortError::Config(_))));
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "src_dir: /a\ndst_dir: /b\nextra: 1\n").unwrap();

        let config = DirConfig {
            src_dir: PathBuf::from("/c"),
            dst_dir: PathBuf::from("/d"),
        };
        config.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(!written.contains("extra"));
        assert_eq!(DirConfig::load(&path).unwrap(), config);
    }
}
