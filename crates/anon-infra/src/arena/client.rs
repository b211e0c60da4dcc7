//! reqwest implementation of [`ArenaApi`].

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Url};
use serde::Deserialize;
use serde_json::Value;

use anon_core::domain::{ThreadId, ThreadRecord, UpstreamPayload};
use anon_core::error::UpstreamError;
use anon_core::ports::{ArenaApi, UpstreamReply};

pub const DEFAULT_BASE_URL: &str = "https://api.starsarena.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Upstream client configuration.
#[derive(Clone)]
pub struct ArenaConfig {
    pub base_url: Url,
    /// Bearer token for the shared posting account. Empty when unset; upstream
    /// then rejects the call and the rejection is relayed.
    pub auth_token: String,
    /// Per-request timeout. Calls are never retried.
    pub timeout: Duration,
}

impl fmt::Debug for ArenaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaConfig")
            .field("base_url", &self.base_url.as_str())
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ArenaConfig {
    pub fn new(base_url: Url, auth_token: impl Into<String>) -> Self {
        Self {
            base_url,
            auth_token: auth_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Load from `ARENA_BASE_URL`, `ARENA_AUTH_TOKEN` and `ARENA_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ArenaConfigError> {
        let raw_url =
            std::env::var("ARENA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|source| ArenaConfigError::InvalidBaseUrl {
            url: raw_url.clone(),
            source,
        })?;

        let auth_token = std::env::var("ARENA_AUTH_TOKEN").unwrap_or_default();
        if auth_token.is_empty() {
            tracing::warn!("ARENA_AUTH_TOKEN not set; upstream calls will be rejected");
        }

        Ok(Self {
            base_url,
            auth_token,
            timeout: parse_timeout(std::env::var("ARENA_TIMEOUT_SECS").ok().as_deref()),
        })
    }
}

/// Whole seconds, at least one. Anything else falls back to [`DEFAULT_TIMEOUT`].
fn parse_timeout(raw: Option<&str>) -> Duration {
    match raw.map(|s| s.trim().parse::<u64>()) {
        None => DEFAULT_TIMEOUT,
        Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
        Some(_) => {
            tracing::warn!(
                value = raw.unwrap_or_default(),
                "Ignoring invalid ARENA_TIMEOUT_SECS, using {}s",
                DEFAULT_TIMEOUT.as_secs()
            );
            DEFAULT_TIMEOUT
        }
    }
}

/// Upstream configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ArenaConfigError {
    #[error("Invalid ARENA_BASE_URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

#[derive(Deserialize)]
struct ThreadEnvelope {
    thread: ThreadRecord,
}

/// HTTP client for the StarsArena REST API.
pub struct ArenaClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: String,
}

impl ArenaClient {
    pub fn new(config: ArenaConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.as_str().trim_end_matches('/').to_string(),
            auth_token: config.auth_token,
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .bearer_auth(&self.auth_token)
            .header(CONTENT_TYPE, "application/json")
    }

    /// Send and decode. Non-success statuses become [`UpstreamError::Status`],
    /// carrying the body's `message` field when there is one.
    async fn send(&self, request: RequestBuilder, path: &str) -> Result<UpstreamReply, UpstreamError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(path, error = %e, "Upstream request failed");
            UpstreamError::Transport(e.to_string())
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        tracing::debug!(path, status = status.as_u16(), "Upstream responded");

        if !status.is_success() {
            let message = serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| body.get("message")?.as_str().map(str::to_owned))
                .filter(|m| !m.is_empty());

            tracing::warn!(
                path,
                status = status.as_u16(),
                message = message.as_deref().unwrap_or(""),
                "Upstream rejected request"
            );

            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|e| UpstreamError::Decode(e.to_string()))?
        };

        Ok(UpstreamReply {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ArenaApi for ArenaClient {
    async fn fetch_thread(&self, thread_id: &ThreadId) -> Result<ThreadRecord, UpstreamError> {
        let request = self
            .request(Method::GET, "/threads")
            .query(&[("threadId", thread_id.as_str())]);

        let reply = self.send(request, "/threads").await?;
        let envelope: ThreadEnvelope =
            serde_json::from_value(reply.body).map_err(|e| UpstreamError::Decode(e.to_string()))?;

        Ok(envelope.thread)
    }

    async fn create_thread(&self, payload: &UpstreamPayload) -> Result<UpstreamReply, UpstreamError> {
        let request = self.request(Method::POST, "/threads").json(payload);
        self.send(request, "/threads").await
    }

    async fn create_answer(&self, payload: &UpstreamPayload) -> Result<UpstreamReply, UpstreamError> {
        let request = self.request(Method::POST, "/threads/answer").json(payload);
        self.send(request, "/threads/answer").await
    }
}
