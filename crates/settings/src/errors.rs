//! Centralized error handling.
//!
//! `ConfigurationError` is the only failure the settings loader produces.
//! `AppError` wraps it for the operator CLI together with output failures.

use thiserror::Error;

/// Settings could not be constructed from the given inputs.
///
/// Always fatal at startup: retrying cannot succeed without the operator
/// fixing the offending value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A raw value could not be coerced into the field's type
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A coerced value violates the field's constraints
    #[error("Value out of range for {field}: {message}")]
    OutOfRange { field: String, message: String },
}

impl ConfigurationError {
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigurationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigurationError::OutOfRange {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending setting
    pub fn field(&self) -> &str {
        match self {
            ConfigurationError::InvalidValue { field, .. }
            | ConfigurationError::OutOfRange { field, .. } => field,
        }
    }
}

impl From<validator::ValidationErrors> for ConfigurationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let first = errors.field_errors().into_iter().next().map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| format!("{} is invalid", field));
            (field.to_string(), message)
        });

        match first {
            Some((field, message)) => ConfigurationError::out_of_range(field, message),
            None => ConfigurationError::out_of_range("settings", errors.to_string()),
        }
    }
}

/// Result type alias for settings construction
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Operator CLI error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Unknown setting: {0}")]
    UnknownField(String),

    #[error("Failed to render settings: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
