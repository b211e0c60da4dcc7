use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Upstream thread identifier, taken from the last path segment of a post URL.
///
/// Never empty: the only way to build one is [`ThreadId::from_post_url`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ThreadId(String);

impl ThreadId {
    /// Extract the thread id from a post URL such as
    /// `https://arena.social/someone/status/abc-123`.
    pub fn from_post_url(post_url: &str) -> Result<Self, ValidationError> {
        let segment = post_url.trim().rsplit('/').next().unwrap_or_default();

        if segment.is_empty() {
            return Err(ValidationError::InvalidPostUrl);
        }

        Ok(Self(segment.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Thread as returned by the upstream lookup. Only the author id is used;
/// everything else is kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadRecord {
    pub user_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ThreadRecord {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            extra: Map::new(),
        }
    }
}
