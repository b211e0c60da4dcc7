//! Post handlers.

use actix_web::{HttpResponse, http::StatusCode, web};

use anon_core::domain::{Markup, NewPost};
use anon_core::ports::UpstreamReply;
use anon_shared::dto::{LegacyPostRequest, PostRequest};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let post = NewPost::parse(body.content.as_deref())?;
    publish(&state, &request_id, post, Markup::Paragraph).await
}

/// POST /api - first-generation route, kept for older clients.
pub async fn create_legacy_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<LegacyPostRequest>,
) -> AppResult<HttpResponse> {
    let post = NewPost::parse(body.post.as_deref())?;
    publish(&state, &request_id, post, Markup::Block).await
}

async fn publish(
    state: &AppState,
    request_id: &RequestId,
    post: NewPost,
    markup: Markup,
) -> AppResult<HttpResponse> {
    let payload = post.into_payload(markup);
    let reply = state.arena.create_thread(&payload).await?;

    tracing::info!(request_id = %request_id, status = reply.status, "Thread created");

    Ok(relay(reply))
}

/// Pass an upstream success through with its status and body untouched.
pub(crate) fn relay(reply: UpstreamReply) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::OK);
    HttpResponse::build(status).json(reply.body)
}
