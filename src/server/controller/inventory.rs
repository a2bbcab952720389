use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, InternalErrorDto, MessageDto},
        inventory::{BrigadeInventoryDto, Category, InventoryInputDto, InventoryItemDto},
    },
    server::{
        controller::util::{json::AppJson, path::AppPath},
        error::Error,
        model::app::AppState,
        service::{inventory::InventoryService, Upserted},
    },
};

pub static INVENTORY_TAG: &str = "inventario";

/// Resolves an `/api/inventario/{categoria}` path segment
fn category_from_path(segment: &str) -> Result<Category, Error> {
    Category::from_path_segment(segment).ok_or_else(|| {
        Error::not_found(format!("Categoría de inventario no encontrada: {}", segment))
    })
}

/// Get the full inventory of a brigade grouped by category
#[utoipa::path(
    get,
    path = "/api/inventario/brigada/{brigada_id}",
    tag = INVENTORY_TAG,
    params(("brigada_id" = i32, Path, description = "Brigade ID")),
    responses(
        (status = 200, description = "Inventory keyed by category", body = BrigadeInventoryDto),
        (status = 404, description = "Brigade not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn get_brigade_inventory(
    State(state): State<AppState>,
    AppPath(brigada_id): AppPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let inventory = InventoryService::new(&state.sql)
        .get_by_brigade(brigada_id)
        .await?;

    Ok((StatusCode::OK, Json(inventory)))
}

/// Create or update the inventory row of a brigade for a resource type (and size, for `epp`)
#[utoipa::path(
    post,
    path = "/api/inventario/{categoria}",
    tag = INVENTORY_TAG,
    params(
        ("categoria" = String, Path, description = "epp, herramientas, logistica, alimentacion, campo, limpieza, medicamentos or rescate-animal")
    ),
    request_body = InventoryInputDto,
    responses(
        (status = 200, description = "Existing row updated", body = InventoryItemDto),
        (status = 201, description = "Row created", body = InventoryItemDto),
        (status = 400, description = "Missing fields or invalid references", body = ErrorDto),
        (status = 404, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn upsert_inventory_item(
    State(state): State<AppState>,
    AppPath(categoria): AppPath<String>,
    AppJson(input): AppJson<InventoryInputDto>,
) -> Result<impl IntoResponse, Error> {
    let category = category_from_path(&categoria)?;

    let response = match InventoryService::new(&state.sql)
        .upsert(category, input)
        .await?
    {
        Upserted::Created(item) => (StatusCode::CREATED, Json(item)),
        Upserted::Updated(item) => (StatusCode::OK, Json(item)),
    };

    Ok(response)
}

#[utoipa::path(
    get,
    path = "/api/inventario/{categoria}/{id}",
    tag = INVENTORY_TAG,
    params(
        ("categoria" = String, Path, description = "Inventory category path segment"),
        ("id" = i32, Path, description = "Inventory row ID")
    ),
    responses(
        (status = 200, description = "The inventory row", body = InventoryItemDto),
        (status = 404, description = "Unknown category or row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn get_inventory_item(
    State(state): State<AppState>,
    AppPath((categoria, id)): AppPath<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let category = category_from_path(&categoria)?;
    let item = InventoryService::new(&state.sql).get(category, id).await?;

    Ok((StatusCode::OK, Json(item)))
}

#[utoipa::path(
    delete,
    path = "/api/inventario/{categoria}/{id}",
    tag = INVENTORY_TAG,
    params(
        ("categoria" = String, Path, description = "Inventory category path segment"),
        ("id" = i32, Path, description = "Inventory row ID")
    ),
    responses(
        (status = 200, description = "Row deleted", body = MessageDto),
        (status = 404, description = "Unknown category or row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = InternalErrorDto)
    ),
)]
pub async fn delete_inventory_item(
    State(state): State<AppState>,
    AppPath((categoria, id)): AppPath<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    let category = category_from_path(&categoria)?;
    let message = InventoryService::new(&state.sql).delete(category, id).await?;

    Ok((StatusCode::OK, Json(message)))
}
