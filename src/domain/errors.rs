// SPDX-License-Identifier: Apache-2.0

//! Error types for the configuration crate.
//!
//! The taxonomy distinguishes genuine absence (`KeyNotFound`) from a value
//! that exists but cannot be parsed (`TypeMismatch`) and from destination
//! shapes that can never be decoded (`UnsupportedShape`). Default-substituting
//! accessors and composite binding rely on this distinction: only absence is
//! ever swallowed.

use thiserror::Error;

/// The main error type for configuration operations.
///
/// Marked `#[non_exhaustive]` to allow future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use layercfg::domain::errors::ConfigError;
///
/// let err = ConfigError::KeyNotFound { key: "database.host".to_string() };
/// assert!(err.is_not_found());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// No source produced a non-empty value for the key.
    #[error("configuration key not found: {key}")]
    KeyNotFound {
        /// The key that was not found.
        key: String,
    },

    /// A value existed for the key but failed to parse into the requested kind.
    #[error("value '{value}' for key '{key}' is not a valid {expected}")]
    TypeMismatch {
        /// The key being converted.
        key: String,
        /// The raw value as resolved from the sources.
        value: String,
        /// The kind the caller asked for ("boolean", "integer", ...).
        expected: &'static str,
        /// The underlying parse error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The destination shape cannot be decoded at all (e.g. a map).
    #[error("unsupported destination shape '{shape}' for key '{key}'")]
    UnsupportedShape {
        /// The key the caller tried to bind at.
        key: String,
        /// A short name for the rejected shape.
        shape: &'static str,
    },

    /// An error occurred while building a configuration source.
    #[error("configuration source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error.
        source_name: String,
        /// The error message.
        message: String,
        /// The underlying error, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to parse a configuration document.
    #[error("failed to parse configuration: {message}")]
    ParseError {
        /// The error message.
        message: String,
        /// The underlying parsing error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Returns `true` when the error is `KeyNotFound`.
    ///
    /// This is the predicate that drives default substitution and composite
    /// found/not-found aggregation; all other variants must propagate.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::KeyNotFound { .. })
    }

    /// Creates a `TypeMismatch` for a key whose value failed to parse.
    pub fn mismatch<E>(key: &str, value: &str, expected: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::TypeMismatch {
            key: key.to_string(),
            value: value.to_string(),
            expected,
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
