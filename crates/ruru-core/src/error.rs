// Rust guideline compliant 2026-10-16

//! Error types for the Ruru core library.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for Ruru operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable error codes for machine-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The argument matched none of the choices.
    NoMatch,
    /// The argument matched several choices and only one was allowed.
    AmbiguousMatch,
    /// Batch input was supplied without the several-ok policy.
    BatchNotAllowed,
    /// IO failure while reading or writing configuration.
    IoError,
    /// Configuration file or environment value is invalid.
    InvalidConfig,
    /// A fallback for errors raised outside this library.
    Unknown,
}

/// Error types for Ruru operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The argument is not a prefix of any choice.
    #[error(
        "The provided argument '{arg}' is not valid. Available choices are: {}.",
        .choices.join(", ")
    )]
    NoMatch {
        /// The literal argument.
        arg: String,
        /// All (deduplicated) choices.
        choices: Vec<String>,
    },

    /// The argument is a prefix of several choices and none matches exactly.
    #[error(
        "The argument '{arg}' matches multiple choices: {}. Be more specific.",
        .matches.join(", ")
    )]
    Ambiguous {
        /// The literal argument.
        arg: String,
        /// Every choice that starts with the argument.
        matches: Vec<String>,
    },

    /// Batch input requires the several-ok policy.
    #[error(
        "Batch input is only allowed when several_ok is enabled. \
         Enable several_ok or provide a single argument."
    )]
    BatchNotAllowed,

    /// A single element of a batch failed to resolve.
    #[error("Error in batch element {index} ('{arg}'): {source}")]
    BatchElement {
        /// 0-based position of the element.
        index: usize,
        /// The literal element value.
        arg: String,
        /// The underlying failure.
        source: Box<Error>,
    },

    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Returns a stable error code for the error.
    ///
    /// Batch element errors report the code of the failure they wrap.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::NoMatch { .. } => ErrorCode::NoMatch,
            Error::Ambiguous { .. } => ErrorCode::AmbiguousMatch,
            Error::BatchNotAllowed => ErrorCode::BatchNotAllowed,
            Error::BatchElement { source, .. } => source.code(),
            Error::Io(_) => ErrorCode::IoError,
            Error::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Returns true for failures produced by argument matching itself.
    #[must_use]
    pub fn is_match_failure(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::NoMatch | ErrorCode::AmbiguousMatch | ErrorCode::BatchNotAllowed
        )
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::NoMatch { arg, choices } => Some(serde_json::json!({
                "arg": arg,
                "choices": choices,
            })),
            Error::Ambiguous { arg, matches } => Some(serde_json::json!({
                "arg": arg,
                "matches": matches,
            })),
            Error::BatchElement { index, arg, source } => {
                let mut details = serde_json::json!({
                    "index": index,
                    "element": arg,
                });
                if let (Some(inner), Some(map)) = (source.details(), details.as_object_mut()) {
                    map.insert("cause".to_string(), inner);
                }
                Some(details)
            }
            Error::BatchNotAllowed | Error::Io(_) | Error::InvalidConfig(_) => None,
        }
    }
}
