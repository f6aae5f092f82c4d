//! Error types for the doclens library.
//!
//! One enum covers the whole pipeline because every failure is fatal to the
//! call that produced it: there is no partial result, no degraded mode, and
//! no automatic retry anywhere in the crate. A caller either gets the full
//! normalized result or a single `Err` with a human-readable message.
//!
//! Three families:
//!
//! * Document loading ([`DocLensError::FileNotFound`] and friends) — the input
//!   never reached the pipeline.
//! * [`DocLensError::Transport`] — the remote service call failed. The
//!   underlying SDK error chain is preserved as the `source` for callers that
//!   want to distinguish throttling from auth failures.
//! * [`DocLensError::MalformedResponse`] — the service answered, but the
//!   response is missing the message text or usage fields. Surfaced rather
//!   than swallowed: it means the API schema broke and the caller must know.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the doclens library.
#[derive(Debug, Error)]
pub enum DocLensError {
    // ── Document errors ───────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("PDF file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The payload was read but does not start with the PDF magic bytes.
    #[error("Document '{name}' is not a valid PDF\nFirst bytes: {magic:?}")]
    NotAPdf { name: String, magic: [u8; 4] },

    // ── Remote service errors ─────────────────────────────────────────────
    /// The Bedrock call failed: network error, throttling, auth, or a
    /// service-side fault. Never retried by this crate — the full error
    /// chain is wrapped so the caller can decide what to do.
    #[error("Bedrock Converse call failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The service responded, but the response is missing the fields the
    /// normalizer requires (text content block, usage counters).
    #[error("Malformed model response: {detail}")]
    MalformedResponse { detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed, or a request could not be assembled from
    /// the given parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DocLensError {
    /// Wrap a transport-layer failure, keeping the cause chain intact.
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        DocLensError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Transport failure with no structured cause (message only).
    pub fn transport_msg(message: impl Into<String>) -> Self {
        DocLensError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// A response that is missing required fields.
    pub fn malformed(detail: impl Into<String>) -> Self {
        DocLensError::MalformedResponse {
            detail: detail.into(),
        }
    }
}
