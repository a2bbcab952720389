//! Error types for the brigade management server.
//!
//! Request-level failures (validation, missing entities, blocked deletions) carry a message
//! meant for the API consumer. Everything else is treated as unhandled and surfaces as a
//! generic 500 through [`InternalServerError`].

pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::InternalErrorDto,
    server::error::{config::ConfigError, request::RequestError},
};

/// Main error type for the server.
///
/// Aggregates domain errors and library errors so services and controllers can propagate
/// with `?` and let [`IntoResponse`] pick the status code.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Rejected request (invalid input, missing entity, blocked deletion).
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::RequestError(RequestError::Validation(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::RequestError(RequestError::NotFound(message.into()))
    }

    pub fn dependency_conflict(message: impl Into<String>) -> Self {
        Self::RequestError(RequestError::DependencyConflict(message.into()))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid input or a deletion blocked by dependent rows
/// - 404 Not Found - Requested entity does not exist
/// - 500 Internal Server Error - Everything else (logged)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RequestError(err) => err.into_response(),
            Self::ConfigError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The error is logged in full. The body carries a generic message, plus the error text in
/// `details` for debug builds only.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let details = cfg!(debug_assertions).then(|| self.0.to_string());

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(InternalErrorDto {
                error: true,
                message: "Internal server error".to_string(),
                details,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use sea_orm::DbErr;

    use super::Error;

    async fn body_json(error: Error) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn request_errors_map_to_client_statuses() {
        let (status, body) = body_json(Error::validation("nombre is required")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({ "message": "nombre is required" }));

        let (status, _) = body_json(Error::not_found("Brigade not found")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = body_json(Error::dependency_conflict("in use")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    /// Tests run as debug builds, so the details are present
    #[tokio::test]
    async fn database_errors_become_generic_500() {
        let (status, body) = body_json(Error::DbErr(DbErr::Custom("boom".to_string()))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], true);
        assert_eq!(body["message"], "Internal server error");
        assert!(body["details"].as_str().unwrap().contains("boom"));
    }
}
