//! Scrubber configuration.
//!
//! Options can be built in code or loaded from a YAML profile:
//!
//! ```yaml
//! style: mask
//! mask_char: "*"
//! scrub_gstin: false
//! ```
//!
//! Missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How a verified identifier is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskStyle {
    /// Replace with a token such as `[PAN_MASKED]`
    #[default]
    Placeholder,
    /// Overwrite every letter and digit with `mask_char`, keeping separators
    Mask,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrubOptions {
    pub mask_char: char,
    pub style: MaskStyle,
    pub scrub_aadhaar: bool,
    pub scrub_pan: bool,
    pub scrub_gstin: bool,
}

impl Default for ScrubOptions {
    fn default() -> Self {
        Self {
            mask_char: 'X',
            style: MaskStyle::Placeholder,
            scrub_aadhaar: true,
            scrub_pan: true,
            scrub_gstin: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScrubConfigError {
    #[error("failed to read scrub profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scrub profile: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ScrubOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to character masking with the given character.
    pub fn masked_with(mut self, mask_char: char) -> Self {
        self.style = MaskStyle::Mask;
        self.mask_char = mask_char;
        self
    }

    pub fn aadhaar(mut self, enabled: bool) -> Self {
        self.scrub_aadhaar = enabled;
        self
    }

    pub fn pan(mut self, enabled: bool) -> Self {
        self.scrub_pan = enabled;
        self
    }

    pub fn gstin(mut self, enabled: bool) -> Self {
        self.scrub_gstin = enabled;
        self
    }

    /// Parse options from YAML. An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScrubConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScrubConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ScrubConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }
}
