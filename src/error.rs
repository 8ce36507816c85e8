use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

use crate::{
    clients::video_api::VideoApiError,
    response::{ApiResponse, Meta},
};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("ORM error")]
    OrmError(#[from] DbErr),

    #[error("Video API error")]
    VideoApi(#[from] VideoApiError),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(label: &str) -> Self {
        AppError::NotFound(format!("{label} not found"))
    }

    /// Translate a failed insert/update into the envelope, keeping constraint
    /// violations out of the 500 bucket.
    pub fn from_write(err: DbErr, label: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AppError::BadRequest(format!("{label} already exists"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::BadRequest(format!(
                "{label} references a record that does not exist"
            )),
            _ => match err {
                DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::not_found(label),
                other => AppError::OrmError(other),
            },
        }
    }

    pub fn from_delete(err: DbErr, label: &str) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::BadRequest(format!(
                "{label} cannot be deleted while other records reference it"
            )),
            _ => AppError::OrmError(err),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::OrmError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::VideoApi(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorData {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::OrmError(err) => tracing::error!(error = %err, "database error"),
            AppError::VideoApi(err) => tracing::error!(error = %err, "video api error"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal error"),
            _ => {}
        }

        let message = self.to_string();
        let body = ApiResponse {
            message: message.clone(),
            data: Some(ErrorData { error: message }),
            meta: Some(Meta::empty()),
        };

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_not_updated_becomes_not_found() {
        let err = AppError::from_write(DbErr::RecordNotUpdated, "Category");
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Category not found"));
    }

    #[test]
    fn unrelated_errors_stay_internal() {
        let err = AppError::from_delete(DbErr::Custom("boom".into()), "Product");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn status_codes_follow_variant() {
        assert_eq!(AppError::not_found("Reel").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::BadRequest("nope".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Forbidden.status(), StatusCode::FORBIDDEN);
    }
}
