//! Data Transfer Objects - request bodies accepted by the local API.
//!
//! Every field is optional on the wire so that a missing field reaches the
//! handler and is reported as a validation error instead of a parse error.

use serde::{Deserialize, Serialize};

/// `POST /api/post`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostRequest {
    pub content: Option<String>,
}

/// `POST /api/comment`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommentRequest {
    pub content: Option<String>,
    #[serde(rename = "postURL")]
    pub post_url: Option<String>,
}

/// `POST /api` - first-generation endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LegacyPostRequest {
    pub post: Option<String>,
}
