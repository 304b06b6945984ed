//! Run configuration: defaults, optionally overridden by a YAML file and then by
//! command-line flags.
//!
//! ```yaml
//! output-dir: Songs
//! index-title: Songbook
//! default-section: Miscellaneous
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ChoproError;

pub const DEFAULT_OUTPUT_DIR: &str = "Songs";
pub const DEFAULT_INDEX_TITLE: &str = "Songs";

/// Raw config file contents; every key is optional.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub output_dir: Option<PathBuf>,
    pub index_title: Option<String>,
    pub default_section: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    /// Heading and `<TITLE>` of the index page.
    pub index_title: String,
    /// Section for songs that appear before any `{section}` directive.
    pub default_section: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            index_title: DEFAULT_INDEX_TITLE.to_string(),
            default_section: None,
        }
    }
}

impl Config {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty document deserializes as unit, not as a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig = serde_yaml::from_str(content)?;
        Ok(Self::default().merge(raw))
    }

    pub fn load(path: &Path) -> Result<Self, ChoproError> {
        let content = fs::read_to_string(path).map_err(|source| ChoproError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|e| ChoproError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn merge(self, raw: RawConfig) -> Self {
        Self {
            output_dir: raw.output_dir.unwrap_or(self.output_dir),
            index_title: raw.index_title.unwrap_or(self.index_title),
            default_section: raw.default_section.or(self.default_section),
        }
    }
}
