//! Promotional clip generation through the external avatar video API.
//!
//! A local `generated_videos` row tracks every request. Provider failures are written to
//! the row (`status = failed`) and the row is returned, so the caller always gets the
//! current record back.

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::{
    audit::record,
    clients::VideoStatus,
    dto::videos::{GenerateVideoRequest, VideoList},
    entity::generated_videos,
    error::AppResult,
    middleware::auth::AuthUser,
    models::GeneratedVideo,
    pagination::PaginationQuery,
    response::{ApiResponse, Meta},
    services::required,
    state::AppState,
    unit_of_work::GeneratedVideosUnitOfWork,
};

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PROCESSING: &str = "processing";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_FAILED: &str = "failed";

pub async fn generate_video(
    state: &AppState,
    user: &AuthUser,
    payload: GenerateVideoRequest,
) -> AppResult<ApiResponse<GeneratedVideo>> {
    let script = required(payload.script, "Script")?;
    let avatar_id = required(payload.avatar_id, "Avatar id")?;
    let voice_id = required(payload.voice_id, "Voice id")?;

    let uow = GeneratedVideosUnitOfWork::new(&state.orm);
    let now = Utc::now();
    let video = uow
        .add(generated_videos::ActiveModel {
            id: NotSet,
            user_id: Set(user.user_id),
            external_video_id: Set(None),
            script: Set(script),
            avatar_id: Set(avatar_id),
            voice_id: Set(voice_id),
            status: Set(STATUS_PENDING.to_string()),
            video_url: Set(None),
            error: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .await?;

    let outcome = state
        .video
        .create_video(&video.script, &video.avatar_id, &video.voice_id)
        .await;

    let mut active: generated_videos::ActiveModel = video.into();
    match outcome {
        Ok(external_id) => {
            active.external_video_id = Set(Some(external_id));
            active.status = Set(STATUS_PROCESSING.to_string());
        }
        Err(err) => {
            tracing::warn!(error = %err, "video generation request failed");
            active.status = Set(STATUS_FAILED.to_string());
            active.error = Set(Some(err.to_string()));
        }
    }
    active.updated_at = Set(Utc::now());
    let video = uow.update(active).await?;

    record(
        &state.orm,
        user.user_id,
        "video_generate",
        "generated_videos",
        serde_json::json!({ "id": video.id, "status": video.status }),
    )
    .await;

    Ok(ApiResponse::success("Video requested", video.into(), Some(Meta::empty())))
}

/// Refreshes the row from the provider. Rows without a provider id, or already finished,
/// come back unchanged. A failed poll is noted in `error` and leaves the status alone.
pub async fn refresh_status(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<GeneratedVideo>> {
    let uow = GeneratedVideosUnitOfWork::new(&state.orm);
    let video = uow.owned(id, user.user_id).await?;

    let external_id = match video.external_video_id.clone() {
        Some(external_id) if !is_terminal(&video.status) => external_id,
        _ => return Ok(ApiResponse::success("Video", video.into(), None)),
    };

    let outcome = state.video.video_status(&external_id).await;
    let mut active: generated_videos::ActiveModel = video.into();
    match outcome {
        Ok(remote) => {
            active.status = Set(local_status(&remote).to_string());
            active.error = Set(None);
            if remote.video_url.is_some() {
                active.video_url = Set(remote.video_url);
            }
        }
        Err(err) => {
            // The render may still be running remotely; only the provider can fail it.
            tracing::warn!(error = %err, video_id = id, "video status poll failed");
            active.error = Set(Some(err.to_string()));
        }
    }
    active.updated_at = Set(Utc::now());
    let video = uow.update(active).await?;

    Ok(ApiResponse::success("Video", video.into(), None))
}

pub async fn list_videos(
    state: &AppState,
    user: &AuthUser,
    query: PaginationQuery,
) -> AppResult<ApiResponse<VideoList>> {
    let page = GeneratedVideosUnitOfWork::new(&state.orm)
        .by_user(user.user_id, &query)
        .await?
        .map(GeneratedVideo::from);
    let meta = page.meta();
    Ok(ApiResponse::success("Videos", VideoList { items: page.items }, Some(meta)))
}

pub async fn get_video(
    state: &AppState,
    user: &AuthUser,
    id: i32,
) -> AppResult<ApiResponse<GeneratedVideo>> {
    let video = GeneratedVideosUnitOfWork::new(&state.orm)
        .owned(id, user.user_id)
        .await?;
    Ok(ApiResponse::success("Video", video.into(), None))
}

fn is_terminal(status: &str) -> bool {
    status == STATUS_COMPLETED || status == STATUS_FAILED
}

/// Provider states collapse onto the local lifecycle; anything unfinished is `processing`.
fn local_status(remote: &VideoStatus) -> &'static str {
    match remote.status.as_str() {
        "completed" => STATUS_COMPLETED,
        "failed" => STATUS_FAILED,
        _ => STATUS_PROCESSING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(status: &str) -> VideoStatus {
        VideoStatus {
            status: status.to_string(),
            video_url: None,
        }
    }

    #[test]
    fn provider_states_map_to_lifecycle() {
        assert_eq!(local_status(&remote("completed")), STATUS_COMPLETED);
        assert_eq!(local_status(&remote("failed")), STATUS_FAILED);
        assert_eq!(local_status(&remote("waiting")), STATUS_PROCESSING);
        assert_eq!(local_status(&remote("pending")), STATUS_PROCESSING);
    }

    #[test]
    fn finished_rows_are_terminal() {
        assert!(is_terminal(STATUS_COMPLETED));
        assert!(is_terminal(STATUS_FAILED));
        assert!(!is_terminal(STATUS_PROCESSING));
    }
}
