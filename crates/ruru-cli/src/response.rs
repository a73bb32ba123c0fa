// Rust guideline compliant 2026-10-16

//! Response envelopes for JSON output.

use ruru_core::ErrorCode;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from any error raised by a command.
    ///
    /// Errors from the core library keep their code and details; anything
    /// else is reported as [`ErrorCode::Unknown`].
    #[must_use]
    pub fn from_error(error: &anyhow::Error) -> Self {
        let message = error_message(error);
        match error.downcast_ref::<ruru_core::Error>() {
            Some(core) => Self {
                code: core.code(),
                message,
                details: core.details(),
            },
            None => Self {
                code: ErrorCode::Unknown,
                message,
                details: None,
            },
        }
    }
}

/// Joins the context chain of `error` with `: `.
///
/// The chain stops at the first core error: its message already embeds
/// whatever it wraps.
pub fn error_message(error: &anyhow::Error) -> String {
    let mut parts = Vec::new();
    for cause in error.chain() {
        parts.push(cause.to_string());
        if cause.is::<ruru_core::Error>() {
            break;
        }
    }
    parts.join(": ")
}
