//! Wire types for the `/api/detect` exchange.
//!
//! DESIGN
//! ======
//! The restoration service answers with JSON on success and plain text on
//! failure. `DetectError` keeps the server-reported case apart from transport
//! and decode failures because only the former is shown verbatim.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Generic results-area text for failures that carry no user-facing detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred during processing.";

/// Successful detect response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DetectionResult {
    /// Displayable reference to the processed image (URL or data URI).
    pub output_image: String,
    /// Server-side copy of the uploaded image. The page shows its own local
    /// preview instead.
    #[serde(default)]
    pub input_image: Option<String>,
}

/// Failure of a single detect submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DetectError {
    /// The service answered with a non-success status.
    #[error("detect rejected: status {status}")]
    Rejected { status: u16, body: String },

    /// The request could not be built, sent, or its body read.
    #[error("detect request failed: {0}")]
    Transport(String),

    /// The success body was not a valid `DetectionResult`.
    #[error("detect response parse failed: {0}")]
    Decode(String),

    /// The local preview URL for the selected file could not be created.
    #[error("preview url failed: {0}")]
    Preview(String),
}

impl DetectError {
    /// Text placed in the results area for this failure.
    #[must_use]
    pub fn results_message(&self) -> String {
        match self {
            Self::Rejected { body, .. } => format!("Error: {body}"),
            Self::Transport(_) | Self::Decode(_) | Self::Preview(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }

    /// Whether the failure was reported by the service rather than thrown.
    #[must_use]
    pub fn is_server_reported(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Parse a success body.
///
/// # Errors
///
/// Returns [`DetectError::Decode`] when the body is not JSON or lacks
/// `output_image`.
pub fn decode_detection(body: &str) -> Result<DetectionResult, DetectError> {
    serde_json::from_str(body).map_err(|e| DetectError::Decode(e.to_string()))
}
