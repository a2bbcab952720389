use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, InternalErrorDto, MessageDto},
        brigade::{BrigadeDto, BrigadeInputDto},
    },
    server::{
        controller::util::{json::AppJson, path::AppPath},
        error::Error,
        model::app::AppState,
        service::brigade::BrigadeService,
    },
};

pub static BRIGADE_TAG: &str = "brigadas";

/// List all brigades ordered by name
#[utoipa::path(
    get,
    path = "/api/brigadas",
    tag = BRIGADE_TAG,
    responses(
        (status = 200, description = "All brigades", body = Vec<BrigadeDto>),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn list_brigades(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let brigades = BrigadeService::new(&state.sql).list().await?;

    Ok((StatusCode::OK, Json(brigades)))
}

#[utoipa::path(
    get,
    path = "/api/brigadas/{id}",
    tag = BRIGADE_TAG,
    params(("id" = i32, Path, description = "Brigade ID")),
    responses(
        (status = 200, description = "The brigade", body = BrigadeDto),
        (status = 404, description = "Brigade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn get_brigade(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let brigade = BrigadeService::new(&state.sql).get(id).await?;

    Ok((StatusCode::OK, Json(brigade)))
}

/// Create a brigade
#[utoipa::path(
    post,
    path = "/api/brigadas",
    tag = BRIGADE_TAG,
    request_body = BrigadeInputDto,
    responses(
        (status = 201, description = "Brigade created", body = BrigadeDto),
        (status = 400, description = "Name missing or body malformed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn create_brigade(
    State(state): State<AppState>,
    AppJson(input): AppJson<BrigadeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let brigade = BrigadeService::new(&state.sql).create(input).await?;

    Ok((StatusCode::CREATED, Json(brigade)))
}

/// Update the supplied fields of a brigade
#[utoipa::path(
    put,
    path = "/api/brigadas/{id}",
    tag = BRIGADE_TAG,
    params(("id" = i32, Path, description = "Brigade ID")),
    request_body = BrigadeInputDto,
    responses(
        (status = 200, description = "Brigade updated", body = BrigadeDto),
        (status = 400, description = "Invalid input", body = ErrorDto),
        (status = 404, description = "Brigade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn update_brigade(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<BrigadeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let brigade = BrigadeService::new(&state.sql).update(id, input).await?;

    Ok((StatusCode::OK, Json(brigade)))
}

/// Delete a brigade together with its inventory
#[utoipa::path(
    delete,
    path = "/api/brigadas/{id}",
    tag = BRIGADE_TAG,
    params(("id" = i32, Path, description = "Brigade ID")),
    responses(
        (status = 200, description = "Brigade deleted", body = MessageDto),
        (status = 404, description = "Brigade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn delete_brigade(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = BrigadeService::new(&state.sql).delete(id).await?;

    Ok((StatusCode::OK, Json(message)))
}
