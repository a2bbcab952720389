use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A request the server understood but refuses to carry out
#[derive(Error, Debug)]
pub enum RequestError {
    /// Missing fields, category mismatch, duplicate keys or unknown references
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    /// Deletion blocked while dependent rows reference the entity
    #[error("{0}")]
    DependencyConflict(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) | Self::DependencyConflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        tracing::debug!(status = %status, "{}", self);

        (
            status,
            Json(ErrorDto {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
