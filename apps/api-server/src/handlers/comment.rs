//! Comment handler - resolve the thread author, then reply.

use actix_web::{HttpResponse, web};

use anon_core::domain::CommentPlan;
use anon_shared::dto::CommentRequest;

use super::post::relay;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/comment
pub async fn create_comment(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let plan = CommentPlan::parse(body.content.as_deref(), body.post_url.as_deref())?;

    let thread = state
        .arena
        .fetch_thread(plan.thread_id())
        .await
        .map_err(|e| AppError::upstream(e, "Failed to fetch thread details"))?;

    tracing::debug!(
        request_id = %request_id,
        thread_id = %plan.thread_id(),
        user_id = %thread.user_id,
        "Thread resolved"
    );

    let comment = plan.resolve(thread);
    let reply = state
        .arena
        .create_answer(&comment.payload())
        .await
        .map_err(|e| AppError::upstream(e, "Failed to post comment"))?;

    tracing::info!(
        request_id = %request_id,
        thread_id = %comment.thread_id(),
        status = reply.status,
        "Comment posted"
    );

    Ok(relay(reply))
}
