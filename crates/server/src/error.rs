//! Unified error handling for the HTTP boundary.
//!
//! Provides a unified `AppError` type mapping the closed error taxonomy to
//! HTTP status codes. All route handlers return `Result<T, AppError>`.
//!
//! Store failures map to 500 and the response body carries the error
//! message; downstream clients rely on that contract.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::MissingCredential
                | AuthError::InvalidToken
                | AuthError::CredentialMismatch => StatusCode::UNAUTHORIZED,
                AuthError::EmailTaken => StatusCode::CONFLICT,
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::InvalidEmail(_) => StatusCode::BAD_REQUEST,
                AuthError::Repository(repo) => repository_status(repo),
                AuthError::PasswordHash | AuthError::Token(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Database(repo) => repository_status(repo),
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Auth(err) => err.to_string(),
            Self::Database(err) => err.to_string(),
            Self::NotFound(msg) | Self::Validation(msg) => msg.clone(),
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
        RepositoryError::Conflict(_) => StatusCode::CONFLICT,
        RepositoryError::Database(_)
        | RepositoryError::OrderWrite(_)
        | RepositoryError::DataCorruption(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request error");
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_auth_failures_map_to_401() {
        assert_eq!(
            status_of(AppError::Auth(AuthError::MissingCredential)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Auth(AuthError::InvalidToken)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Auth(AuthError::CredentialMismatch)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_missing_identity_maps_to_404() {
        assert_eq!(
            status_of(AppError::Auth(AuthError::UserNotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_empty_update_maps_to_400() {
        assert_eq!(
            status_of(AppError::Database(RepositoryError::NoFieldsToUpdate)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_duplicate_email_maps_to_409() {
        assert_eq!(
            status_of(AppError::Auth(AuthError::EmailTaken)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_store_failures_map_to_500() {
        assert_eq!(
            status_of(AppError::Database(RepositoryError::DataCorruption(
                "bad email".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
