use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    dto::videos::{GenerateVideoRequest, VideoList},
    error::AppResult,
    middleware::auth::AuthUser,
    models::GeneratedVideo,
    pagination::PaginationQuery,
    response::ApiResponse,
    services::video_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos))
        .route("/generate", post(generate_video))
        .route("/{id}", get(get_video))
        .route("/{id}/status", get(video_status))
}

#[utoipa::path(
    post,
    path = "/api/videos/generate",
    request_body = GenerateVideoRequest,
    responses(
        (status = 200, description = "Video requested; a provider failure is reported on the record", body = ApiResponse<GeneratedVideo>),
        (status = 400, description = "Missing script, avatar or voice")
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
pub async fn generate_video(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<GenerateVideoRequest>,
) -> AppResult<Json<ApiResponse<GeneratedVideo>>> {
    Ok(Json(video_service::generate_video(&state, &user, payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/videos/{id}/status",
    params(
        ("id" = i32, Path, description = "Generated video ID")
    ),
    responses(
        (status = 200, description = "Record refreshed from the provider", body = ApiResponse<GeneratedVideo>),
        (status = 404, description = "Video not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
pub async fn video_status(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<GeneratedVideo>>> {
    Ok(Json(video_service::refresh_status(&state, &user, id).await?))
}

#[utoipa::path(
    get,
    path = "/api/videos",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Caller's generated videos", body = ApiResponse<VideoList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
pub async fn list_videos(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<PaginationQuery>,
) -> AppResult<Json<ApiResponse<VideoList>>> {
    Ok(Json(video_service::list_videos(&state, &user, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/videos/{id}",
    params(
        ("id" = i32, Path, description = "Generated video ID")
    ),
    responses(
        (status = 200, description = "Generated video", body = ApiResponse<GeneratedVideo>),
        (status = 404, description = "Video not found")
    ),
    security(("bearer_auth" = [])),
    tag = "Videos"
)]
pub async fn get_video(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<GeneratedVideo>>> {
    Ok(Json(video_service::get_video(&state, &user, id).await?))
}
