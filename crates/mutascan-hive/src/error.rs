use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use mutascan_core::store::StoreError;
use mutascan_core::{MutantError, ValidationError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request: {0}")]
    Payload(#[from] JsonRejection),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

impl From<MutantError> for AppError {
    fn from(e: MutantError) -> Self {
        match e {
            MutantError::Validation(v) => AppError::Validation(v),
            MutantError::Storage(s) => AppError::Storage(s),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, kind, msg) = match self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, "Validation Error", e.to_string()),
            AppError::Payload(e) => (StatusCode::BAD_REQUEST, "Validation Error", e.body_text()),
            AppError::Storage(e) => {
                tracing::error!("Storage Error: {}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Storage Error",
                    "Verdict store unavailable".to_string(),
                )
            }
        };

        let body = json!({
            "timestamp": Utc::now(),
            "status": status.as_u16(),
            "error": kind,
            "message": msg,
        });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
