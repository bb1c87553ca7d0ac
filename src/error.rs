use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong across the pattern modules.
///
/// Bypassing the singleton's construction gate has no variant here: the
/// constructor is private, so the attempt never compiles.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("property '{name}' not found anywhere on the delegate chain")]
    PropertyNotFound { name: String },

    #[error("property '{name}' is a data field, not an operation")]
    NotCallable { name: String },

    #[error("property '{name}' is an operation, not a data field")]
    NotAField { name: String },

    #[error("lookup of '{name}' exceeded the delegate chain limit of {limit}")]
    DelegateChainTooDeep { name: String, limit: usize },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatternError {
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::PropertyNotFound { name: name.into() }
    }

    pub fn not_callable(name: impl Into<String>) -> Self {
        Self::NotCallable { name: name.into() }
    }

    pub fn not_a_field(name: impl Into<String>) -> Self {
        Self::NotAField { name: name.into() }
    }

    pub fn too_deep(name: impl Into<String>, limit: usize) -> Self {
        Self::DelegateChainTooDeep {
            name: name.into(),
            limit,
        }
    }
}

pub type Result<T> = std::result::Result<T, PatternError>;
