//! Domain-level error types.

use thiserror::Error;

/// Local input errors - the request is rejected before any upstream call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing content")]
    MissingContent,

    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid postURL")]
    InvalidPostUrl,
}

/// Failures talking to the upstream platform.
#[derive(Debug, Clone, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-success status.
    /// `message` is the upstream-supplied `message` field, if the body had one.
    #[error("{}", status_message(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Unexpected upstream response: {0}")]
    Decode(String),
}

fn status_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(msg) => msg.to_string(),
        None => format!("HTTP error! status: {}", status),
    }
}

impl UpstreamError {
    /// The upstream message, or `fallback` when upstream did not supply one.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            UpstreamError::Status {
                message: Some(msg), ..
            } => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status reported by upstream, if the call got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Cool-down gate errors.
#[derive(Debug, Error)]
pub enum CooldownError {
    #[error("Please wait {remaining_secs} seconds before posting again.")]
    Active { remaining_secs: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_prefers_upstream_message() {
        let err = UpstreamError::Status {
            status: 404,
            message: Some("not found".to_string()),
        };
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.message_or("Failed to fetch thread details"), "not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn status_error_without_message_uses_fallbacks() {
        let err = UpstreamError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(err.to_string(), "HTTP error! status: 502");
        assert_eq!(err.message_or("Failed to post comment"), "Failed to post comment");
    }
}
