//! Wire format of a feature request to the assistant service.
//!
//! The request goes out as one JSON text frame. The response comes back as
//! plain text frames delimited by `Startstreaming` / `Endstreaming`, which
//! `goose_dialog` interprets.

use goose_common::GooseError;
use serde::{Deserialize, Serialize};

/// A feature request with the code it is about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HelpRequest {
    pub message: String,
    pub code: String,
}

impl HelpRequest {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
        }
    }

    pub fn to_frame(&self) -> goose_common::Result<String> {
        serde_json::to_string(self).map_err(|e| GooseError::Encode(e.to_string()))
    }
}
