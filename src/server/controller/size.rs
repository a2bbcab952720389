use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, InternalErrorDto, MessageDto},
        size::{SizeDto, SizeInputDto},
    },
    server::{
        controller::util::{json::AppJson, path::AppPath},
        error::Error,
        model::app::AppState,
        service::size::SizeService,
    },
};

pub static SIZE_TAG: &str = "tallas";

/// List all sizes ordered by code
#[utoipa::path(
    get,
    path = "/api/tallas",
    tag = SIZE_TAG,
    responses(
        (status = 200, description = "All sizes", body = Vec<SizeDto>),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn list_sizes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let sizes = SizeService::new(&state.sql).list().await?;

    Ok((StatusCode::OK, Json(sizes)))
}

#[utoipa::path(
    get,
    path = "/api/tallas/{id}",
    tag = SIZE_TAG,
    params(("id" = i32, Path, description = "Size ID")),
    responses(
        (status = 200, description = "The size", body = SizeDto),
        (status = 404, description = "Size not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn get_size(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let size = SizeService::new(&state.sql).get(id).await?;

    Ok((StatusCode::OK, Json(size)))
}

#[utoipa::path(
    post,
    path = "/api/tallas",
    tag = SIZE_TAG,
    request_body = SizeInputDto,
    responses(
        (status = 201, description = "Size created", body = SizeDto),
        (status = 400, description = "Missing fields or duplicate code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn create_size(
    State(state): State<AppState>,
    AppJson(input): AppJson<SizeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let size = SizeService::new(&state.sql).create(input).await?;

    Ok((StatusCode::CREATED, Json(size)))
}

#[utoipa::path(
    put,
    path = "/api/tallas/{id}",
    tag = SIZE_TAG,
    params(("id" = i32, Path, description = "Size ID")),
    request_body = SizeInputDto,
    responses(
        (status = 200, description = "Size updated", body = SizeDto),
        (status = 400, description = "Blank fields or duplicate code", body = ErrorDto),
        (status = 404, description = "Size not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn update_size(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<SizeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let size = SizeService::new(&state.sql).update(id, input).await?;

    Ok((StatusCode::OK, Json(size)))
}

/// Delete a size not referenced by PPE inventory
#[utoipa::path(
    delete,
    path = "/api/tallas/{id}",
    tag = SIZE_TAG,
    params(("id" = i32, Path, description = "Size ID")),
    responses(
        (status = 200, description = "Size deleted", body = MessageDto),
        (status = 400, description = "Size still referenced by inventory", body = ErrorDto),
        (status = 404, description = "Size not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn delete_size(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = SizeService::new(&state.sql).delete(id).await?;

    Ok((StatusCode::OK, Json(message)))
}
