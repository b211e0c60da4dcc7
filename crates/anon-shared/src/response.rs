//! Error envelope returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Generic message for anything that is not the caller's fault.
    pub fn internal_error() -> Self {
        Self::new("An error occurred while processing your request")
    }
}
