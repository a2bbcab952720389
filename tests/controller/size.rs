//! Tests for the `/api/tallas` endpoints.

use super::*;

#[tokio::test]
async fn duplicate_code_is_rejected() {
    let test = setup().await;

    test.create("/api/tallas", json!({ "codigo": "M", "descripcion": "Mediana" }))
        .await;
    let large = test
        .create(
            "/api/tallas",
            json!({ "codigo": "L", "descripcion": "Grande", "numero_equivalente": 42 }),
        )
        .await;

    let (status, body) = test
        .post("/api/tallas", json!({ "codigo": "M", "descripcion": "Otra" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Ya existe una talla con ese código");

    let (status, body) = test
        .put(&format!("/api/tallas/{}", large), json!({ "codigo": "M" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Ya existe otra talla con ese código");

    let (status, list) = test.get("/api/tallas").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["codigo"], "L");
    assert_eq!(list[0]["numero_equivalente"], 42);
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let test = setup().await;

    let (status, body) = test.post("/api/tallas", json!({ "codigo": "S" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "El código y la descripción son requeridos");
}

/// A size used by PPE inventory cannot be deleted until the row is gone
#[tokio::test]
async fn delete_guard() {
    let test = setup().await;
    let brigade = test
        .create("/api/brigadas", json!({ "nombre": "Brigada Norte" }))
        .await;
    let boots = test
        .create(
            "/api/tipos-recursos",
            json!({ "categoria": "EPP", "nombre": "Botas", "requiere_talla": true }),
        )
        .await;
    let size = test
        .create("/api/tallas", json!({ "codigo": "42", "descripcion": "Calzado 42" }))
        .await;
    let item = test
        .create(
            "/api/inventario/epp",
            json!({ "brigada_id": brigade, "tipo_recurso_id": boots, "talla_id": size, "cantidad": 1 }),
        )
        .await;

    let (status, body) = test.delete(&format!("/api/tallas/{}", size)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "No se puede eliminar la talla porque está siendo utilizada en el inventario"
    );

    test.delete(&format!("/api/inventario/epp/{}", item)).await;

    let (status, body) = test.delete(&format!("/api/tallas/{}", size)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Talla eliminada exitosamente");

    let (status, _) = test.delete(&format!("/api/tallas/{}", size)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
