use crate::error::ValidationError;

use super::payload::{Markup, UpstreamPayload};

/// A validated top-level post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    content: String,
}

impl NewPost {
    /// Validate submitted content. Absent or blank content is rejected.
    pub fn parse(content: Option<&str>) -> Result<Self, ValidationError> {
        match content {
            Some(c) if !c.trim().is_empty() => Ok(Self {
                content: c.to_string(),
            }),
            _ => Err(ValidationError::MissingContent),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_payload(self, markup: Markup) -> UpstreamPayload {
        UpstreamPayload::thread(&self.content, markup)
    }
}
