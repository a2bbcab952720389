//! Tests for the `/api/brigadas` endpoints.

use axum::{extract::State, response::IntoResponse};
use brigadas::{
    model::brigade::BrigadeInputDto,
    server::controller::{brigade::create_brigade, util::json::AppJson},
};

use super::*;

/// Calling the handler directly returns 201 with the stored brigade
#[tokio::test]
async fn create_handler_returns_created() {
    let test = setup().await;

    let result = create_brigade(
        State(test.state.clone()),
        AppJson(BrigadeInputDto {
            nombre: Some("Brigada Test".to_string()),
            ..Default::default()
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn crud_round_trip() {
    let test = setup().await;

    let id = test
        .create(
            "/api/brigadas",
            json!({ "nombre": "Brigada Norte", "cantidad_bomberos_activos": 14 }),
        )
        .await;

    let (status, brigade) = test.get(&format!("/api/brigadas/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(brigade["nombre"], "Brigada Norte");
    assert_eq!(brigade["cantidad_bomberos_activos"], 14);
    assert_eq!(brigade["encargado_logistica"], serde_json::Value::Null);

    let (status, updated) = test
        .put(
            &format!("/api/brigadas/{}", id),
            json!({ "encargado_logistica": "Ana" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["nombre"], "Brigada Norte");
    assert_eq!(updated["encargado_logistica"], "Ana");

    let (status, body) = test.delete(&format!("/api/brigadas/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Brigada eliminada exitosamente");

    let (status, body) = test.get(&format!("/api/brigadas/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Brigada no encontrada");
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let test = setup().await;

    test.create("/api/brigadas", json!({ "nombre": "Sur" })).await;
    test.create("/api/brigadas", json!({ "nombre": "Centro" })).await;

    let (status, list) = test.get("/api/brigadas").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["nombre"], "Centro");
    assert_eq!(list[1]["nombre"], "Sur");
}

#[tokio::test]
async fn create_without_name_is_rejected() {
    let test = setup().await;

    let (status, body) = test
        .post("/api/brigadas", json!({ "cantidad_bomberos_activos": 3 }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El nombre de la brigada es requerido");
}

/// Malformed bodies get the JSON error shape instead of a plain-text rejection
#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let test = setup().await;

    let (status, body) = test
        .post("/api/brigadas", json!({ "cantidad_bomberos_activos": "many" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

/// Deleting a brigade removes its inventory in the same transaction
#[tokio::test]
async fn delete_removes_inventory() {
    let test = setup().await;
    let brigade_id = test
        .create("/api/brigadas", json!({ "nombre": "Brigada Oeste" }))
        .await;
    let tool_id = test
        .create(
            "/api/tipos-recursos",
            json!({ "categoria": "HERRAMIENTAS", "nombre": "Pala" }),
        )
        .await;
    test.create(
        "/api/inventario/herramientas",
        json!({ "brigada_id": brigade_id, "tipo_recurso_id": tool_id, "cantidad": 2 }),
    )
    .await;

    let (status, _) = test.delete(&format!("/api/brigadas/{}", brigade_id)).await;
    assert_eq!(status, StatusCode::OK);

    // The resource type is no longer referenced and can be removed
    let (status, _) = test
        .delete(&format!("/api/tipos-recursos/{}", tool_id))
        .await;
    assert_eq!(status, StatusCode::OK);
}

/// Unparsable ids get the JSON error shape instead of a plain-text rejection
#[tokio::test]
async fn invalid_path_id_is_a_json_bad_request() {
    let test = setup().await;

    for (method, uri) in [
        ("GET", "/api/brigadas/abc"),
        ("GET", "/api/brigadas/99999999999"),
        ("GET", "/api/inventario/epp/zz"),
        ("DELETE", "/api/tipos-recursos/abc"),
    ] {
        let (status, body) = match method {
            "GET" => test.get(uri).await,
            _ => test.delete(uri).await,
        };

        assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert!(body["message"].is_string(), "{} {} returned {}", method, uri, body);
    }
}
