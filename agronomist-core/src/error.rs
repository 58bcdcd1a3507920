/// Structured error types for agronomist-core.
///
/// Uses `thiserror` so the server can map variants onto status codes.
/// The binary (agronomist-cli) wraps these with `anyhow` context.

use thiserror::Error;

/// Main error type for agronomist-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgronomistError {
    /// Page slug or label that is not one of the five pages
    #[error("Unknown page '{value}'")]
    UnknownPage { value: String },

    /// Crop name outside the common-crops list
    #[error("Unknown crop '{value}'")]
    UnknownCrop { value: String },

    /// Pest category outside the four known categories
    #[error("Unknown pest category '{value}'")]
    UnknownPestCategory { value: String },

    /// Malformed query string, form body, or flag value
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for agronomist-core operations
pub type Result<T> = std::result::Result<T, AgronomistError>;

impl AgronomistError {
    /// Create an unknown page error
    pub fn unknown_page(value: impl Into<String>) -> Self {
        Self::UnknownPage {
            value: value.into(),
        }
    }

    /// Create an unknown crop error
    pub fn unknown_crop(value: impl Into<String>) -> Self {
        Self::UnknownCrop {
            value: value.into(),
        }
    }

    /// Create an unknown pest category error
    pub fn unknown_pest_category(value: impl Into<String>) -> Self {
        Self::UnknownPestCategory {
            value: value.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// True when the error came from user-supplied input rather than setup
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Config { .. })
    }
}
