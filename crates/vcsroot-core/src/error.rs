//! Error types for VCS root configuration.
//!
//! Typed parameters are stored as plain strings, so most reads cannot
//! fail: a missing string is simply absent and a missing flag is `false`.
//! The one failure on the read path is an enumeration whose stored text
//! names no declared constant; that surfaces as
//! [`VcsRootError::UnknownVariant`] on the getter that decoded it.
//!
//! # Example
//!
//! ```
//! use vcsroot_core::{Result, VcsRootError};
//!
//! fn auth_method(raw: &str) -> Result<&'static str> {
//!     match raw {
//!         "ANONYMOUS" => Ok("ANONYMOUS"),
//!         other => Err(VcsRootError::unknown_variant(
//!             "authMethod",
//!             other,
//!             &["ANONYMOUS"],
//!         )),
//!     }
//! }
//!
//! assert!(auth_method("SOMETHING").unwrap_err().is_unknown_variant());
//! ```

use std::io;
use thiserror::Error;

/// Main error type for VCS root operations.
#[derive(Debug, Error)]
pub enum VcsRootError {
    /// A stored value does not match any constant of the expected enumeration.
    #[error("Unknown value '{value}' for parameter '{key}', expected one of: {}", expected.join(", "))]
    UnknownVariant {
        /// Store key that was decoded
        key: String,
        /// The raw value found in the store
        value: String,
        /// Constant names the enumeration declares
        expected: Vec<String>,
    },

    /// Text parsed outside the store names no constant of an enumeration.
    #[error("Unknown {type_name} constant '{value}', expected one of: {}", expected.join(", "))]
    UnknownConstant {
        /// Name of the enumeration type
        type_name: String,
        /// The text that failed to parse
        value: String,
        /// Constant names the enumeration declares
        expected: Vec<String>,
    },

    /// A required parameter is absent.
    #[error("Parameter '{key}' is not set")]
    MissingParameter {
        /// The key that was looked up
        key: String,
    },

    /// A document declares a different VCS type than the one requested.
    #[error("VCS type mismatch: expected '{expected}', found '{actual}'")]
    TypeMismatch {
        /// Discriminator the caller asked for
        expected: String,
        /// Discriminator carried by the document
        actual: String,
    },

    /// Error parsing a root document.
    #[error("Failed to parse VCS root from '{source_name}': {message}")]
    ParseError {
        /// Source of the document (filename, format name, etc.)
        source_name: String,
        /// Description of the parse error
        message: String,
        /// Underlying error, if any
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Error rendering a root document.
    #[error("Failed to serialize VCS root to '{target}': {message}")]
    SerializeError {
        /// Target format
        target: String,
        /// Description of what went wrong
        message: String,
    },

    /// The document format could not be determined.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl VcsRootError {
    /// Creates an UnknownVariant error.
    pub fn unknown_variant(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::UnknownVariant {
            key: key.into(),
            value: value.into(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates an UnknownConstant error.
    pub fn unknown_constant(
        type_name: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::UnknownConstant {
            type_name: type_name.into(),
            value: value.into(),
            expected: expected.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a MissingParameter error.
    pub fn missing_parameter(key: impl Into<String>) -> Self {
        Self::MissingParameter { key: key.into() }
    }

    /// Creates a TypeMismatch error.
    pub fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Creates a ParseError without a cause.
    pub fn parse_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a ParseError with a cause.
    pub fn parse_error_with_cause<E>(
        source: impl Into<String>,
        message: impl Into<String>,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a SerializeError.
    pub fn serialize_error(target: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SerializeError {
            target: target.into(),
            message: message.into(),
        }
    }

    /// Returns true if an enumeration failed to decode, whether read from
    /// the store or parsed from text.
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self, Self::UnknownVariant { .. } | Self::UnknownConstant { .. })
    }

    /// Returns true if a required parameter was absent.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns true if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Type alias for Results with VcsRootError.
pub type Result<T> = std::result::Result<T, VcsRootError>;
