//! Error types for Rebound

use thiserror::Error;

/// The main error type for Rebound operations
#[derive(Debug, Error)]
pub enum ReboundError {
    #[error("Invalid parameter: {field} {reason}")]
    InvalidParameter { field: String, reason: String },

    #[error("Safety cap exceeded: curve did not come to rest within {cap} frames")]
    SafetyCapExceeded { cap: u32 },

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Duplicate object name: {0}")]
    DuplicateObjectName(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Scene error: {0}")]
    SceneError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),
}

impl ReboundError {
    /// Shorthand for building an `InvalidParameter` error.
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ReboundError::InvalidParameter {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// True for user input errors (as opposed to IO or config failures).
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, ReboundError::InvalidParameter { .. })
    }
}

/// Result type alias for Rebound operations
pub type Result<T> = std::result::Result<T, ReboundError>;

impl From<toml::de::Error> for ReboundError {
    fn from(err: toml::de::Error) -> Self {
        ReboundError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for ReboundError {
    fn from(err: toml::ser::Error) -> Self {
        ReboundError::TomlSerError(err.to_string())
    }
}
