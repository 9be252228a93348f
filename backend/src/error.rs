use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::store::StoreError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    /// The store could not be reached at all; the driver message is passed through.
    #[error("Database connection failed: {0}")]
    DatabaseUnavailable(#[source] sqlx::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(_) => {
                tracing::debug!(error = %self, "Rejected request");
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            AppError::Conflict(_) => {
                tracing::debug!(error = %self, "Conflicting request");
                (StatusCode::CONFLICT, json!({ "message": self.to_string() }))
            }
            AppError::DatabaseUnavailable(_) => {
                tracing::warn!(error = %self, "Database unreachable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": self.to_string() }),
                )
            }
            AppError::Database(_) => {
                tracing::error!("Internal error: {:?}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "detail": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AlreadyExists(_) => AppError::Conflict("Already exists".to_string()),
        }
    }
}
