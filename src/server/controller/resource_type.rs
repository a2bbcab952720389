use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, InternalErrorDto, MessageDto},
        resource_type::{ResourceTypeDto, ResourceTypeFilterDto, ResourceTypeInputDto},
    },
    server::{
        controller::util::{json::AppJson, path::AppPath},
        error::Error,
        model::app::AppState,
        service::resource_type::ResourceTypeService,
    },
};

pub static RESOURCE_TYPE_TAG: &str = "tipos-recursos";

/// List resource types ordered by category and name
#[utoipa::path(
    get,
    path = "/api/tipos-recursos",
    tag = RESOURCE_TYPE_TAG,
    params(ResourceTypeFilterDto),
    responses(
        (status = 200, description = "Matching resource types", body = Vec<ResourceTypeDto>),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn list_resource_types(
    State(state): State<AppState>,
    Query(filter): Query<ResourceTypeFilterDto>,
) -> Result<impl IntoResponse, Error> {
    let resource_types = ResourceTypeService::new(&state.sql).list(filter).await?;

    Ok((StatusCode::OK, Json(resource_types)))
}

/// List the distinct categories in use
#[utoipa::path(
    get,
    path = "/api/tipos-recursos/categorias",
    tag = RESOURCE_TYPE_TAG,
    responses(
        (status = 200, description = "Sorted category tags", body = Vec<String>),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let categories = ResourceTypeService::new(&state.sql).categories().await?;

    Ok((StatusCode::OK, Json(categories)))
}

#[utoipa::path(
    get,
    path = "/api/tipos-recursos/{id}",
    tag = RESOURCE_TYPE_TAG,
    params(("id" = i32, Path, description = "Resource type ID")),
    responses(
        (status = 200, description = "The resource type", body = ResourceTypeDto),
        (status = 404, description = "Resource type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn get_resource_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let resource_type = ResourceTypeService::new(&state.sql).get(id).await?;

    Ok((StatusCode::OK, Json(resource_type)))
}

#[utoipa::path(
    post,
    path = "/api/tipos-recursos",
    tag = RESOURCE_TYPE_TAG,
    request_body = ResourceTypeInputDto,
    responses(
        (status = 201, description = "Resource type created", body = ResourceTypeDto),
        (status = 400, description = "Missing fields, unknown category or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn create_resource_type(
    State(state): State<AppState>,
    AppJson(input): AppJson<ResourceTypeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let resource_type = ResourceTypeService::new(&state.sql).create(input).await?;

    Ok((StatusCode::CREATED, Json(resource_type)))
}

#[utoipa::path(
    put,
    path = "/api/tipos-recursos/{id}",
    tag = RESOURCE_TYPE_TAG,
    params(("id" = i32, Path, description = "Resource type ID")),
    request_body = ResourceTypeInputDto,
    responses(
        (status = 200, description = "Resource type updated", body = ResourceTypeDto),
        (status = 400, description = "Unknown category or duplicate name", body = ErrorDto),
        (status = 404, description = "Resource type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn update_resource_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
    AppJson(input): AppJson<ResourceTypeInputDto>,
) -> Result<impl IntoResponse, Error> {
    let resource_type = ResourceTypeService::new(&state.sql)
        .update(id, input)
        .await?;

    Ok((StatusCode::OK, Json(resource_type)))
}

/// Delete a resource type not referenced by any inventory category
#[utoipa::path(
    delete,
    path = "/api/tipos-recursos/{id}",
    tag = RESOURCE_TYPE_TAG,
    params(("id" = i32, Path, description = "Resource type ID")),
    responses(
        (status = 200, description = "Resource type deleted", body = MessageDto),
        (status = 400, description = "Resource type still referenced by inventory", body = ErrorDto),
        (status = 404, description = "Resource type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn delete_resource_type(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let message = ResourceTypeService::new(&state.sql).delete(id).await?;

    Ok((StatusCode::OK, Json(message)))
}
