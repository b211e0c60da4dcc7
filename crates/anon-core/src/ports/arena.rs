//! Upstream platform port.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ThreadId, ThreadRecord, UpstreamPayload};
use crate::error::UpstreamError;

/// Successful upstream response, relayed to the caller as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub body: Value,
}

/// The three upstream operations the service needs.
#[async_trait]
pub trait ArenaApi: Send + Sync {
    /// `GET /threads?threadId={id}`.
    async fn fetch_thread(&self, thread_id: &ThreadId) -> Result<ThreadRecord, UpstreamError>;

    /// `POST /threads`.
    async fn create_thread(&self, payload: &UpstreamPayload) -> Result<UpstreamReply, UpstreamError>;

    /// `POST /threads/answer`.
    async fn create_answer(&self, payload: &UpstreamPayload) -> Result<UpstreamReply, UpstreamError>;
}
