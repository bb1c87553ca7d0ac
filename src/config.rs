use crate::error::{PatternError, Result};
use crate::prototype::DEFAULT_DEPTH_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Knobs for the demo binary. Every key is optional in the TOML file.
///
/// ```toml
/// platform = "android"
/// own_name = "Gallan"
/// max_delegate_depth = 8
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub platform: String,
    pub own_name: String,
    pub max_delegate_depth: usize,
    pub log_level: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            platform: "ios".to_string(),
            own_name: "Gallan".to_string(),
            max_delegate_depth: DEFAULT_DEPTH_LIMIT,
            log_level: "info".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| PatternError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
