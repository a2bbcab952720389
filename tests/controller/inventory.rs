//! Tests for the `/api/inventario` endpoints.

use super::*;

async fn brigade_with_type(test: &TestApp, categoria: &str, nombre: &str) -> (i64, i64) {
    let brigade = test
        .create("/api/brigadas", json!({ "nombre": "Brigada Test" }))
        .await;
    let resource_type = test
        .create(
            "/api/tipos-recursos",
            json!({ "categoria": categoria, "nombre": nombre }),
        )
        .await;

    (brigade, resource_type)
}

/// Posting the same brigade and resource type twice updates the row in place
#[tokio::test]
async fn upsert_creates_then_updates() {
    let test = setup().await;
    let (brigade, tool) = brigade_with_type(&test, "HERRAMIENTAS", "Pala").await;

    let (status, created) = test
        .post(
            "/api/inventario/herramientas",
            json!({ "brigada_id": brigade, "tipo_recurso_id": tool, "cantidad": 5 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["cantidad"], 5);

    let (status, inventory) = test
        .get(&format!("/api/inventario/brigada/{}", brigade))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(inventory["herramientas"].as_array().unwrap().len(), 1);
    assert_eq!(inventory["herramientas"][0]["cantidad"], 5);
    assert_eq!(inventory["herramientas"][0]["tipo_recurso_nombre"], "Pala");
    assert_eq!(inventory["epp"], json!([]));

    let (status, updated) = test
        .post(
            "/api/inventario/herramientas",
            json!({ "brigada_id": brigade, "tipo_recurso_id": tool, "cantidad": 9 }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["cantidad"], 9);

    let (_, inventory) = test
        .get(&format!("/api/inventario/brigada/{}", brigade))
        .await;
    assert_eq!(inventory["herramientas"].as_array().unwrap().len(), 1);
    assert_eq!(inventory["herramientas"][0]["cantidad"], 9);
}

#[tokio::test]
async fn unknown_category_is_not_found() {
    let test = setup().await;

    let (status, body) = test
        .post("/api/inventario/vehiculos", json!({ "brigada_id": 1 }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Categoría de inventario no encontrada: vehiculos");
}

#[tokio::test]
async fn inventory_of_missing_brigade_is_not_found() {
    let test = setup().await;

    let (status, body) = test.get("/api/inventario/brigada/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Brigada no encontrada");
}

/// A resource type can only be stocked under its own category
#[tokio::test]
async fn category_mismatch_is_rejected() {
    let test = setup().await;
    let (brigade, medicine) = brigade_with_type(&test, "MEDICAMENTOS", "Gasas").await;

    let (status, body) = test
        .post(
            "/api/inventario/campo",
            json!({ "brigada_id": brigade, "tipo_recurso_id": medicine, "cantidad": 1 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "El tipo de recurso no pertenece a la categoría CAMPO"
    );
}

#[tokio::test]
async fn ppe_requires_size_when_flagged() {
    let test = setup().await;
    let brigade = test
        .create("/api/brigadas", json!({ "nombre": "Brigada Test" }))
        .await;
    let boots = test
        .create(
            "/api/tipos-recursos",
            json!({ "categoria": "EPP", "nombre": "Botas", "requiere_talla": true }),
        )
        .await;
    let size = test
        .create("/api/tallas", json!({ "codigo": "40", "descripcion": "Calzado 40" }))
        .await;

    let (status, body) = test
        .post(
            "/api/inventario/epp",
            json!({ "brigada_id": brigade, "tipo_recurso_id": boots, "cantidad": 2 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Este tipo de recurso requiere especificar una talla"
    );

    // Each size is its own row
    test.create(
        "/api/inventario/epp",
        json!({ "brigada_id": brigade, "tipo_recurso_id": boots, "talla_id": size, "cantidad": 2 }),
    )
    .await;

    let (_, inventory) = test
        .get(&format!("/api/inventario/brigada/{}", brigade))
        .await;
    assert_eq!(inventory["epp"][0]["talla_codigo"], "40");
    assert_eq!(inventory["epp"][0]["requiere_talla"], true);
}

/// Only logistics keeps the approximate amount
#[tokio::test]
async fn amount_only_kept_for_logistics() {
    let test = setup().await;
    let (brigade, fuel) = brigade_with_type(&test, "LOGISTICA", "Combustible").await;
    let water = test
        .create(
            "/api/tipos-recursos",
            json!({ "categoria": "ALIMENTACION", "nombre": "Agua" }),
        )
        .await;

    let (_, fuel_row) = test
        .post(
            "/api/inventario/logistica",
            json!({ "brigada_id": brigade, "tipo_recurso_id": fuel, "cantidad": 1, "monto_aproximado": 250.5 }),
        )
        .await;
    let (_, water_row) = test
        .post(
            "/api/inventario/alimentacion",
            json!({ "brigada_id": brigade, "tipo_recurso_id": water, "cantidad": 20, "monto_aproximado": 99.0 }),
        )
        .await;

    assert_eq!(fuel_row["monto_aproximado"], 250.5);
    assert_eq!(water_row["monto_aproximado"], serde_json::Value::Null);
}

#[tokio::test]
async fn get_and_delete_item() {
    let test = setup().await;
    let (brigade, soap) = brigade_with_type(&test, "LIMPIEZA", "Jabón").await;
    let item = test
        .create(
            "/api/inventario/limpieza",
            json!({ "brigada_id": brigade, "tipo_recurso_id": soap, "cantidad": 4, "observaciones": "  " }),
        )
        .await;

    let (status, row) = test.get(&format!("/api/inventario/limpieza/{}", item)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(row["cantidad"], 4);
    assert_eq!(row["observaciones"], serde_json::Value::Null);

    // Ids are scoped per category table
    let (status, _) = test.get(&format!("/api/inventario/campo/{}", item)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = test
        .delete(&format!("/api/inventario/limpieza/{}", item))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item eliminado exitosamente");

    let (status, body) = test
        .delete(&format!("/api/inventario/limpieza/{}", item))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Item de inventario no encontrado");
}
