//! Environment-driven server configuration.
use pramana_privacy::{ScrubConfigError, ScrubOptions};
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8787";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address, `PRAMANA_ADDR`
    pub addr: String,
    /// YAML scrub profile used as the default, `PRAMANA_SCRUB_PROFILE`
    pub scrub_profile: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            scrub_profile: None,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            addr: lookup("PRAMANA_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            scrub_profile: lookup("PRAMANA_SCRUB_PROFILE")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Default scrub options: the profile if one is configured, else the
    /// built-in defaults.
    pub fn scrub_options(&self) -> Result<ScrubOptions, ScrubConfigError> {
        match &self.scrub_profile {
            Some(path) => ScrubOptions::load(path),
            None => Ok(ScrubOptions::default()),
        }
    }
}
