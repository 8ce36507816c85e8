use crate::error::{AppError, AppResult};

pub mod auth_service;
pub mod comment_service;
pub mod favorite_service;
pub mod like_service;
pub mod location_service;
pub mod lookup_service;
pub mod product_service;
pub mod reel_service;
pub mod store_service;
pub mod video_service;

/// Trimmed, non-empty text or a 400 naming the field.
pub(crate) fn required(value: String, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}
