use axum::{response::IntoResponse, Json};

use crate::model::api::IndexDto;

pub static INDEX_TAG: &str = "index";

/// Landing endpoint pointing at the API documentation
#[utoipa::path(
    get,
    path = "/",
    tag = INDEX_TAG,
    responses(
        (status = 200, description = "API is up", body = IndexDto)
    ),
)]
pub async fn index() -> impl IntoResponse {
    Json(IndexDto {
        message: "API de gestión de brigadas forestales".to_string(),
        documentation: "/api/docs".to_string(),
    })
}
