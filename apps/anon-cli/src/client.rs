//! HTTP client for the local Arena Anonymous service.

use std::time::Duration;

use reqwest::StatusCode;
use serde_json::Value;

use anon_shared::dto::{CommentRequest, PostRequest};

use crate::submit::SubmitError;

/// What the user wants to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Post { content: String },
    Comment { post_url: String, content: String },
}

impl Submission {
    fn path(&self) -> &'static str {
        match self {
            Submission::Post { .. } => "/api/post",
            Submission::Comment { .. } => "/api/comment",
        }
    }

    fn body(&self) -> Result<Value, serde_json::Error> {
        match self {
            Submission::Post { content } => serde_json::to_value(PostRequest {
                content: Some(content.clone()),
            }),
            Submission::Comment { post_url, content } => serde_json::to_value(CommentRequest {
                content: Some(content.clone()),
                post_url: Some(post_url.clone()),
            }),
        }
    }
}

pub struct ServiceClient {
    http: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send a submission. Any `error` field in the response body, or a
    /// non-success status, is returned as [`SubmitError::Rejected`].
    pub async fn submit(&self, submission: &Submission) -> Result<Value, SubmitError> {
        let url = format!("{}{}", self.base_url, submission.path());
        let body = submission
            .body()
            .map_err(|e| SubmitError::Decode(e.to_string()))?;

        tracing::debug!(%url, "Submitting");

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: message.to_string(),
            });
        }

        if !status.is_success() {
            return Err(rejected_status(status));
        }

        Ok(body)
    }
}

fn rejected_status(status: StatusCode) -> SubmitError {
    SubmitError::Rejected {
        status: status.as_u16(),
        message: format!("HTTP error! status: {}", status.as_u16()),
    }
}
