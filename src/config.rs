use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::fields::{FieldGroup, parse_fields};

/// File name picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = ".exif-stripper.json";

/// Per-repository defaults for the stripper.
///
/// Command-line flags override anything set here.
///
/// ```json
/// { "fields": ["gps", "serials"], "remove_copyright": false }
/// ```
///
/// Field names are kept as strings so an unknown one is reported with the
/// same message the library uses everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Field groups to remove. Defaults to `["all"]`.
    pub fields: Vec<String>,
    /// Also remove the artist and copyright tags.
    pub remove_copyright: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fields: vec![FieldGroup::All.name().to_string()],
            remove_copyright: false,
        }
    }
}

impl Config {
    /// `.exif-stripper.json` in the working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Load config from the given path, or from the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::config_path();
                if !default.exists() {
                    log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let contents = std::fs::read_to_string(&config_path).with_context(|| {
            format!("Failed to read config file {}", config_path.display())
        })?;
        let config: Config = serde_json::from_str(&contents).with_context(|| {
            format!("Failed to parse config file {}", config_path.display())
        })?;
        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// The effective field groups, validated.
    pub fn field_groups(&self) -> crate::Result<Vec<FieldGroup>> {
        let mut groups = parse_fields(&self.fields)?;
        if groups.is_empty() {
            groups.push(FieldGroup::All);
        }
        if self.remove_copyright && !groups.contains(&FieldGroup::Copyright) {
            groups.push(FieldGroup::Copyright);
        }
        Ok(groups)
    }
}
