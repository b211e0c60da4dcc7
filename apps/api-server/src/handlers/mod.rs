//! HTTP handlers and route configuration.

mod comment;
mod health;
mod post;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("", web::post().to(post::create_legacy_post))
            .route("/health", web::get().to(health::health_check))
            .route("/post", web::post().to(post::create_post))
            .route("/comment", web::post().to(comment::create_comment)),
    );
}

/// JSON extractor config: unreadable bodies become 400 `{ error }`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!("Rejected request body: {}", err);
        AppError::BadRequest("Invalid request body".to_string()).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use anon_core::domain::{ThreadId, ThreadRecord, UpstreamPayload};
    use anon_core::error::UpstreamError;
    use anon_core::ports::{ArenaApi, UpstreamReply};

    use crate::state::AppState;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FetchThread(String),
        CreateThread(UpstreamPayload),
        CreateAnswer(UpstreamPayload),
    }

    /// Records every upstream call and answers with canned results.
    struct FakeArena {
        thread: Result<ThreadRecord, UpstreamError>,
        created: Result<UpstreamReply, UpstreamError>,
        answered: Result<UpstreamReply, UpstreamError>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeArena {
        fn new() -> Self {
            Self {
                thread: Ok(ThreadRecord::new("u9")),
                created: Ok(reply(201, json!({ "id": "t1" }))),
                answered: Ok(reply(200, json!({ "id": "r1" }))),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ArenaApi for FakeArena {
        async fn fetch_thread(&self, thread_id: &ThreadId) -> Result<ThreadRecord, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::FetchThread(thread_id.to_string()));
            self.thread.clone()
        }

        async fn create_thread(
            &self,
            payload: &UpstreamPayload,
        ) -> Result<UpstreamReply, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::CreateThread(payload.clone()));
            self.created.clone()
        }

        async fn create_answer(
            &self,
            payload: &UpstreamPayload,
        ) -> Result<UpstreamReply, UpstreamError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::CreateAnswer(payload.clone()));
            self.answered.clone()
        }
    }

    fn reply(status: u16, body: Value) -> UpstreamReply {
        UpstreamReply { status, body }
    }

    fn rejected(status: u16, message: Option<&str>) -> UpstreamError {
        UpstreamError::Status {
            status,
            message: message.map(str::to_string),
        }
    }

    async fn send(arena: Arc<FakeArena>, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::with_arena(arena)))
                .app_data(json_config())
                .configure(configure_routes),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post().uri(uri).set_json(body)
    }

    #[actix_web::test]
    async fn post_relays_created_thread() {
        let arena = Arc::new(FakeArena::new());

        let (status, body) = send(arena.clone(), post_json("/api/post", json!({ "content": "hello" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({ "id": "t1" }));
        assert_eq!(
            arena.calls(),
            vec![Call::CreateThread(UpstreamPayload::thread(
                "hello",
                anon_core::domain::Markup::Paragraph
            ))]
        );
    }

    #[actix_web::test]
    async fn post_without_content_is_rejected_locally() {
        let arena = Arc::new(FakeArena::new());

        let (status, body) = send(arena.clone(), post_json("/api/post", json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing content" }));
        assert!(arena.calls().is_empty());
    }

    #[actix_web::test]
    async fn post_relays_upstream_rejection() {
        let mut fake = FakeArena::new();
        fake.created = Err(rejected(401, Some("Invalid token")));
        let arena = Arc::new(fake);

        let (status, body) = send(arena, post_json("/api/post", json!({ "content": "hello" }))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Invalid token" }));
    }

    #[actix_web::test]
    async fn post_rejection_without_message_reports_status() {
        let mut fake = FakeArena::new();
        fake.created = Err(rejected(502, None));
        let arena = Arc::new(fake);

        let (status, body) = send(arena, post_json("/api/post", json!({ "content": "hello" }))).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body, json!({ "error": "HTTP error! status: 502" }));
    }

    #[actix_web::test]
    async fn transport_failure_is_a_generic_500() {
        let mut fake = FakeArena::new();
        fake.created = Err(UpstreamError::Transport("operation timed out".to_string()));
        let arena = Arc::new(fake);

        let (status, body) = send(arena, post_json("/api/post", json!({ "content": "hello" }))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "An error occurred while processing your request" })
        );
    }

    #[actix_web::test]
    async fn malformed_body_is_a_bad_request() {
        let arena = Arc::new(FakeArena::new());
        let req = test::TestRequest::post()
            .uri("/api/post")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json");

        let (status, body) = send(arena.clone(), req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid request body" }));
        assert!(arena.calls().is_empty());
    }

    #[actix_web::test]
    async fn comment_replies_to_thread_author() {
        let arena = Arc::new(FakeArena::new());

        let (status, body) = send(
            arena.clone(),
            post_json(
                "/api/comment",
                json!({ "content": "hi", "postURL": "https://arena.social/anon/status/abc-123" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": "r1" }));

        let calls = arena.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], Call::FetchThread("abc-123".to_string()));
        match &calls[1] {
            Call::CreateAnswer(payload) => {
                assert_eq!(payload.content, "<p>hi</p>");
                assert_eq!(payload.thread_id.as_deref(), Some("abc-123"));
                assert_eq!(payload.user_id.as_deref(), Some("u9"));
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn comment_without_content_makes_no_calls() {
        let arena = Arc::new(FakeArena::new());

        let (status, body) = send(
            arena.clone(),
            post_json(
                "/api/comment",
                json!({ "postURL": "https://arena.social/anon/status/abc-123" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Missing required fields" }));
        assert!(arena.calls().is_empty());
    }

    #[actix_web::test]
    async fn comment_with_trailing_slash_url_is_invalid() {
        let arena = Arc::new(FakeArena::new());

        let (status, body) = send(
            arena.clone(),
            post_json(
                "/api/comment",
                json!({ "content": "hi", "postURL": "https://arena.social/anon/status/" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Invalid postURL" }));
        assert!(arena.calls().is_empty());
    }

    #[actix_web::test]
    async fn failed_lookup_never_reaches_reply_endpoint() {
        let mut fake = FakeArena::new();
        fake.thread = Err(rejected(404, Some("not found")));
        let arena = Arc::new(fake);

        let (status, body) = send(
            arena.clone(),
            post_json(
                "/api/comment",
                json!({ "content": "hi", "postURL": "https://arena.social/anon/status/gone" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "not found" }));
        assert_eq!(arena.calls(), vec![Call::FetchThread("gone".to_string())]);
    }

    #[actix_web::test]
    async fn failed_lookup_without_message_uses_fallback() {
        let mut fake = FakeArena::new();
        fake.thread = Err(rejected(500, None));
        let arena = Arc::new(fake);

        let (status, body) = send(
            arena,
            post_json(
                "/api/comment",
                json!({ "content": "hi", "postURL": "https://arena.social/anon/status/abc" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch thread details" }));
    }

    #[actix_web::test]
    async fn failed_reply_without_message_uses_fallback() {
        let mut fake = FakeArena::new();
        fake.answered = Err(rejected(403, None));
        let arena = Arc::new(fake);

        let (status, body) = send(
            arena.clone(),
            post_json(
                "/api/comment",
                json!({ "content": "hi", "postURL": "https://arena.social/anon/status/abc" }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, json!({ "error": "Failed to post comment" }));
        assert_eq!(arena.calls().len(), 2);
    }

    #[actix_web::test]
    async fn legacy_route_wraps_in_div() {
        let arena = Arc::new(FakeArena::new());

        let (status, _) = send(arena.clone(), post_json("/api", json!({ "post": "gm" }))).await;

        assert_eq!(status, StatusCode::CREATED);
        match &arena.calls()[0] {
            Call::CreateThread(payload) => assert_eq!(payload.content, "<div>gm</div>"),
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[actix_web::test]
    async fn health_reports_ok_without_upstream() {
        let arena = Arc::new(FakeArena::new());

        let (status, body) = send(arena.clone(), test::TestRequest::get().uri("/api/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "arena-anon");
        assert!(arena.calls().is_empty());
    }
}
