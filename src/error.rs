//! Error types for the posts service
//!
//! Every failure funnels into [`AppError`]; its `ResponseError` impl
//! is the one place request failures are mapped to HTTP statuses and
//! the uniform `{success, error}` envelope.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for posts-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error kinds
#[derive(Debug, Error)]
pub enum AppError {
    /// The hosted store failed or rejected a request
    #[error("Store error: {0}")]
    Store(String),

    /// Required request fields are missing or empty
    #[error("{0}")]
    Validation(String),

    /// Requested identifier has no matching record
    #[error("{0}")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Store and internal causes stay in the server log; clients
        // only ever see a generic message for 5xx failures.
        let message = match self {
            AppError::Store(_) | AppError::Internal(_) => {
                tracing::error!("request failed: {}", self);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "error": message,
        }))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Store(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            AppError::Store("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Validation("caption is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Post not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn store_causes_are_not_forwarded_to_clients() {
        let response = AppError::Store("connection refused to 10.0.0.5".into()).error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Internal server error");
    }

    #[actix_web::test]
    async fn validation_messages_are_forwarded_verbatim() {
        let response = AppError::Validation("image_url is required".into()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(response.into_body())
            .await
            .expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "image_url is required");
    }
}
