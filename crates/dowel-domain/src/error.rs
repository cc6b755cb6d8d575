//! Error handling types
//!
//! The taxonomy distinguishes three situations:
//!
//! - **Configuration errors** - invalid input at registration time.
//!   Surfaced immediately, never silently defaulted.
//! - **Lookup misses** - a build key or policy kind with nothing
//!   registered. Not represented here at all: lookups return `Option`.
//! - **Resolution failures** - a resolver could not produce a value.
//!   Propagated unchanged up the calling chain; this crate never retries.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Dowel resolution core
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration installed at registration time
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
    },

    /// Invalid argument provided to a function
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// No resolution policy is registered for a build key
    #[error("no resolution policy registered for {key}")]
    PolicyNotFound {
        /// Display form of the build key that could not be resolved
        key: String,
    },

    /// A value was not assignment-compatible with its declared type
    #[error("type mismatch: expected `{expected}`, got `{actual}`")]
    TypeMismatch {
        /// Name of the expected type
        expected: String,
        /// Name of the type actually supplied
        actual: String,
    },

    /// A resolver failed to produce a value
    #[error("resolution error: {message}")]
    Resolution {
        /// Description of the resolution failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a policy-not-found error from anything displayable as a key
    pub fn policy_not_found<K: std::fmt::Display>(key: K) -> Self {
        Self::PolicyNotFound {
            key: key.to_string(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch<S: Into<String>, T: Into<String>>(expected: S, actual: T) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a resolution error
    pub fn resolution<S: Into<String>>(message: S) -> Self {
        Self::Resolution {
            message: message.into(),
            source: None,
        }
    }

    /// Create a resolution error with source
    pub fn resolution_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Resolution {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
