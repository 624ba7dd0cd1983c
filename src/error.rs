//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Result alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures the toolkit reports instead of degrading silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value of an unsupported shape was used where a collection was expected.
    #[error("invalid argument: expected a sequence or mapping, got {0}")]
    InvalidArgument(String),

    /// An unseeded reduction was asked to fold an empty collection.
    #[error("cannot reduce an empty collection without a seed")]
    EmptyCollection,

    /// Memoization arguments could not be serialized into a cache key.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The element does not support the named method.
    #[error("unknown method: {method}")]
    UnknownMethod {
        /// Name that failed to resolve.
        method: String,
    },

    /// A scheduled call was cancelled before it ran.
    #[error("scheduled call was cancelled")]
    Cancelled,

    /// A scheduled call panicked while running.
    #[error("scheduled call panicked: {0}")]
    CallbackPanicked(String),

    /// The method exists but the supplied arguments do not fit it.
    #[error("invalid arguments for {method}: {reason}")]
    InvalidMethodArguments {
        /// Method that rejected its arguments.
        method: String,
        /// What was wrong.
        reason: String,
    },
}

impl Error {
    /// Builds an [`Error::UnknownMethod`].
    pub fn unknown_method(method: impl Into<String>) -> Self {
        Self::UnknownMethod {
            method: method.into(),
        }
    }

    /// Builds an [`Error::InvalidMethodArguments`].
    pub fn invalid_method_arguments(method: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidMethodArguments {
            method: method.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::InvalidArgument("number".into()).to_string(),
            "invalid argument: expected a sequence or mapping, got number"
        );
        assert_eq!(
            Error::EmptyCollection.to_string(),
            "cannot reduce an empty collection without a seed"
        );
        assert_eq!(
            Error::CallbackPanicked("boom".into()).to_string(),
            "scheduled call panicked: boom"
        );
        assert_eq!(
            Error::unknown_method("shout").to_string(),
            "unknown method: shout"
        );
        assert_eq!(
            Error::invalid_method_arguments("get", "expected 1 argument").to_string(),
            "invalid arguments for get: expected 1 argument"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(Error::from(err), Error::Serialization(_)));
    }
}
