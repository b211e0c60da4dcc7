//! Two-stage comment pipeline.
//!
//! A [`CommentPlan`] is a validated request that knows which thread it targets.
//! Resolving it against the fetched [`ThreadRecord`] yields a
//! [`ResolvedComment`], the only input [`UpstreamPayload::answer`] accepts.

use crate::error::ValidationError;

use super::payload::UpstreamPayload;
use super::thread::{ThreadId, ThreadRecord};

/// Stage 1 input: validated content plus the thread to reply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPlan {
    content: String,
    thread_id: ThreadId,
}

impl CommentPlan {
    /// Both fields are required; the URL must end in a non-empty segment.
    pub fn parse(content: Option<&str>, post_url: Option<&str>) -> Result<Self, ValidationError> {
        let (content, post_url) = match (content, post_url) {
            (Some(c), Some(u)) if !c.trim().is_empty() && !u.trim().is_empty() => (c, u),
            _ => return Err(ValidationError::MissingFields),
        };

        Ok(Self {
            content: content.to_string(),
            thread_id: ThreadId::from_post_url(post_url)?,
        })
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// Attach the looked-up thread, moving to stage 2.
    pub fn resolve(self, thread: ThreadRecord) -> ResolvedComment {
        ResolvedComment { plan: self, thread }
    }
}

/// Stage 2 input: a comment whose thread author is known.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedComment {
    plan: CommentPlan,
    thread: ThreadRecord,
}

impl ResolvedComment {
    pub fn content(&self) -> &str {
        &self.plan.content
    }

    pub fn thread_id(&self) -> &ThreadId {
        &self.plan.thread_id
    }

    pub fn thread(&self) -> &ThreadRecord {
        &self.thread
    }

    pub fn payload(&self) -> UpstreamPayload {
        UpstreamPayload::answer(self)
    }
}
