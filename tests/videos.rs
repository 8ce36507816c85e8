mod common;

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use reelbuy_api::{
    dto::videos::GenerateVideoRequest,
    error::AppError,
    pagination::PaginationQuery,
    services::video_service::{self, STATUS_COMPLETED, STATUS_FAILED, STATUS_PROCESSING},
};
use serde::Deserialize;
use serde_json::{Value, json};

const EXTERNAL_ID: &str = "vid-123";
const VIDEO_URL: &str = "https://cdn.example/vid-123.mp4";

#[derive(Deserialize)]
struct StatusQuery {
    video_id: String,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        == Some("test-key")
}

async fn fake_generate(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
    }
    if body["script"].as_str().is_none_or(str::is_empty) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "error": "no script" })));
    }
    (StatusCode::OK, Json(json!({ "data": { "video_id": EXTERNAL_ID } })))
}

async fn fake_status(
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) || query.video_id != EXTERNAL_ID {
        return (StatusCode::NOT_FOUND, Json(json!({ "error": "unknown video" })));
    }
    (
        StatusCode::OK,
        Json(json!({ "data": { "status": "completed", "video_url": VIDEO_URL } })),
    )
}

/// Answers 503 to the first status poll, then delegates to `fake_status`.
async fn flaky_status(
    State(calls): State<Arc<AtomicUsize>>,
    headers: HeaderMap,
    query: Query<StatusQuery>,
) -> (StatusCode, Json<Value>) {
    if calls.fetch_add(1, Ordering::SeqCst) == 0 {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "error": "try later" })),
        );
    }
    fake_status(headers, query).await
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "provider down")
}

async fn spawn_provider(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

fn request() -> GenerateVideoRequest {
    GenerateVideoRequest {
        script: "Meet the softest crab plush on the market".into(),
        avatar_id: "avatar-1".into(),
        voice_id: "voice-1".into(),
    }
}

#[tokio::test]
async fn generate_then_poll_to_completion() -> anyhow::Result<()> {
    let base = spawn_provider(
        Router::new()
            .route("/v2/video/generate", post(fake_generate))
            .route("/v1/video_status.get", get(fake_status)),
    )
    .await?;
    let state = common::setup_state_with_video(&base).await?;
    let seller = common::create_buyer(&state, "seller@example.com").await?;

    let created = video_service::generate_video(&state, &seller, request())
        .await?
        .data
        .expect("video row");
    assert_eq!(created.status, STATUS_PROCESSING);
    assert_eq!(created.external_video_id.as_deref(), Some(EXTERNAL_ID));
    assert!(created.error.is_none());

    let polled = video_service::refresh_status(&state, &seller, created.id)
        .await?
        .data
        .expect("video row");
    assert_eq!(polled.status, STATUS_COMPLETED);
    assert_eq!(polled.video_url.as_deref(), Some(VIDEO_URL));

    // Finished rows are not polled again.
    let again = video_service::refresh_status(&state, &seller, created.id)
        .await?
        .data
        .expect("video row");
    assert_eq!(again.updated_at, polled.updated_at);

    let listed = video_service::list_videos(&state, &seller, PaginationQuery::default()).await?;
    assert_eq!(listed.data.map(|list| list.items.len()), Some(1));
    Ok(())
}

#[tokio::test]
async fn failed_poll_keeps_the_job_pollable() -> anyhow::Result<()> {
    let calls = Arc::new(AtomicUsize::new(0));
    let base = spawn_provider(
        Router::new()
            .route("/v2/video/generate", post(fake_generate))
            .route("/v1/video_status.get", get(flaky_status))
            .with_state(calls.clone()),
    )
    .await?;
    let state = common::setup_state_with_video(&base).await?;
    let seller = common::create_buyer(&state, "seller@example.com").await?;

    let created = video_service::generate_video(&state, &seller, request())
        .await?
        .data
        .expect("video row");

    let first = video_service::refresh_status(&state, &seller, created.id)
        .await?
        .data
        .expect("video row");
    assert_eq!(first.status, STATUS_PROCESSING);
    let error = first.error.unwrap_or_default();
    assert!(error.contains("503"), "unexpected error: {error}");

    let second = video_service::refresh_status(&state, &seller, created.id)
        .await?
        .data
        .expect("video row");
    assert_eq!(second.status, STATUS_COMPLETED);
    assert_eq!(second.video_url.as_deref(), Some(VIDEO_URL));
    assert!(second.error.is_none());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    Ok(())
}

#[tokio::test]
async fn provider_error_marks_the_row_failed() -> anyhow::Result<()> {
    let base = spawn_provider(Router::new().route("/v2/video/generate", post(broken))).await?;
    let state = common::setup_state_with_video(&base).await?;
    let seller = common::create_buyer(&state, "seller@example.com").await?;

    let video = video_service::generate_video(&state, &seller, request())
        .await?
        .data
        .expect("video row");
    assert_eq!(video.status, STATUS_FAILED);
    assert!(video.external_video_id.is_none());
    let error = video.error.unwrap_or_default();
    assert!(error.contains("500"), "unexpected error: {error}");
    Ok(())
}

#[tokio::test]
async fn unreachable_provider_marks_the_row_failed() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let seller = common::create_buyer(&state, "seller@example.com").await?;

    let video = video_service::generate_video(&state, &seller, request())
        .await?
        .data
        .expect("video row");
    assert_eq!(video.status, STATUS_FAILED);
    assert!(video.error.is_some());
    Ok(())
}

#[tokio::test]
async fn blank_script_is_rejected_before_calling_out() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let seller = common::create_buyer(&state, "seller@example.com").await?;

    let payload = GenerateVideoRequest {
        script: "   ".into(),
        ..request()
    };
    let err = video_service::generate_video(&state, &seller, payload)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn other_users_videos_are_hidden() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let owner = common::create_buyer(&state, "owner@example.com").await?;
    let stranger = common::create_buyer(&state, "stranger@example.com").await?;

    let video = video_service::generate_video(&state, &owner, request())
        .await?
        .data
        .expect("video row");

    let err = video_service::get_video(&state, &stranger, video.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Generated video not found"));

    let err = video_service::refresh_status(&state, &stranger, video.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}
