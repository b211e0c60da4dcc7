//! Domain entities - submissions and the upstream objects they turn into.

mod comment;
mod payload;
mod post;
mod thread;

pub use comment::{CommentPlan, ResolvedComment};
pub use payload::{Markup, UpstreamPayload};
pub use post::NewPost;
pub use thread::{ThreadId, ThreadRecord};
