//! Summarise backend stub.
//!
//! Accepts a text payload and acknowledges it. Forwarding the text to the
//! summarisation and video-generation services is not wired up yet; the
//! handler only logs what it received.

use serde::{Deserialize, Serialize};

/// Fixed acknowledgement returned for every request.
pub const ACKNOWLEDGEMENT: &str = "Post done!";

/// Body of a summarise request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummariseRequest {
    pub text: String,
}

/// Response to a summarise request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummariseAck {
    pub message: String,
}

impl SummariseRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Parse a JSON body such as `{"text": "..."}`.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

/// Handle a summarise request.
// TODO: forward `request.text` to the summarisation service once its API is chosen
pub fn handle_summarise(request: &SummariseRequest) -> SummariseAck {
    tracing::info!(
        chars = request.text.chars().count(),
        text = %request.text,
        "Received summarise request"
    );
    SummariseAck {
        message: ACKNOWLEDGEMENT.to_string(),
    }
}
