use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::company_table::table::TableError;
use crate::llm_client::LlmFailureKind;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// A collaborator call failed in a way the request cannot recover from.
    #[error("Upstream failure during {stage}: {kind:?}")]
    Upstream {
        kind: LlmFailureKind,
        stage: &'static str,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<TableError> for AppError {
    fn from(e: TableError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Upstream { kind, stage } => {
                tracing::error!("Collaborator failure during {stage}: {kind:?}");
                let (status, code) = match kind {
                    LlmFailureKind::RateLimited => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
                    LlmFailureKind::InvalidCredential => {
                        (StatusCode::BAD_GATEWAY, "INVALID_CREDENTIAL")
                    }
                    LlmFailureKind::ServerError => {
                        (StatusCode::SERVICE_UNAVAILABLE, "UPSTREAM_UNAVAILABLE")
                    }
                    LlmFailureKind::Unknown => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
                };
                (status, code, kind.user_message().to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(e: AppError) -> StatusCode {
        e.into_response().status()
    }

    #[test]
    fn test_upstream_status_mapping() {
        let up = |kind| AppError::Upstream {
            kind,
            stage: "market_value",
        };
        assert_eq!(status_of(up(LlmFailureKind::RateLimited)), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(status_of(up(LlmFailureKind::InvalidCredential)), StatusCode::BAD_GATEWAY);
        assert_eq!(status_of(up(LlmFailureKind::ServerError)), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(status_of(up(LlmFailureKind::Unknown)), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_table_error_is_validation() {
        let e: AppError = TableError::YearOutOfRange(0).into();
        assert_eq!(status_of(e), StatusCode::BAD_REQUEST);
    }
}
