use serde::Serialize;

use super::comment::ResolvedComment;

/// HTML wrapper applied to user content before it is sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    /// `<p>…</p>` - posts and comments.
    Paragraph,
    /// `<div>…</div>` - the legacy `/api` route.
    Block,
}

impl Markup {
    pub fn wrap(self, content: &str) -> String {
        match self {
            Markup::Paragraph => format!("<p>{}</p>", content),
            Markup::Block => format!("<div>{}</div>", content),
        }
    }
}

/// Body sent to `POST /threads` and `POST /threads/answer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamPayload {
    pub content: String,
    pub files: Vec<String>,
    pub privacy_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl UpstreamPayload {
    /// Payload for a new top-level thread.
    pub fn thread(content: &str, markup: Markup) -> Self {
        Self {
            content: markup.wrap(content),
            files: Vec::new(),
            privacy_type: 0,
            thread_id: None,
            user_id: None,
        }
    }

    /// Payload for a reply. Needs the thread author, so it can only be built
    /// from a comment whose thread has been resolved.
    pub fn answer(comment: &ResolvedComment) -> Self {
        Self {
            content: Markup::Paragraph.wrap(comment.content()),
            files: Vec::new(),
            privacy_type: 0,
            thread_id: Some(comment.thread_id().as_str().to_string()),
            user_id: Some(comment.thread().user_id.clone()),
        }
    }
}
