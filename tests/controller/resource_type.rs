//! Tests for the `/api/tipos-recursos` endpoints.

use super::*;

/// Flags accept booleans, 0/1 and their string forms
#[tokio::test]
async fn lenient_flags() {
    let test = setup().await;

    let (status, created) = test
        .post(
            "/api/tipos-recursos",
            json!({ "categoria": "EPP", "nombre": "Botas", "requiere_talla": "1", "activo": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["requiere_talla"], true);
    assert_eq!(created["requiere_cantidad"], true);
    assert_eq!(created["activo"], true);

    let (status, updated) = test
        .put(
            &format!("/api/tipos-recursos/{}", created["id"]),
            json!({ "activo": "false" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["activo"], false);

    let (status, _) = test
        .post(
            "/api/tipos-recursos",
            json!({ "categoria": "EPP", "nombre": "Casco", "activo": "maybe" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn duplicate_pair_is_rejected() {
    let test = setup().await;

    test.create(
        "/api/tipos-recursos",
        json!({ "categoria": "HERRAMIENTAS", "nombre": "Pala" }),
    )
    .await;

    let (status, body) = test
        .post(
            "/api/tipos-recursos",
            json!({ "categoria": "HERRAMIENTAS", "nombre": "Pala" }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Ya existe un tipo de recurso con ese nombre en la misma categoría"
    );

    let (status, _) = test
        .post(
            "/api/tipos-recursos",
            json!({ "categoria": "CAMPO", "nombre": "Pala" }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn filters_and_categories() {
    let test = setup().await;

    for (categoria, nombre, activo) in [
        ("MEDICAMENTOS", "Gasas", true),
        ("ALIMENTACION", "Agua", true),
        ("ALIMENTACION", "Barras", false),
    ] {
        test.create(
            "/api/tipos-recursos",
            json!({ "categoria": categoria, "nombre": nombre, "activo": activo }),
        )
        .await;
    }

    let (status, categories) = test.get("/api/tipos-recursos/categorias").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(categories, json!(["ALIMENTACION", "MEDICAMENTOS"]));

    let (_, food) = test
        .get("/api/tipos-recursos?categoria=ALIMENTACION&activo=true")
        .await;
    assert_eq!(food.as_array().unwrap().len(), 1);
    assert_eq!(food[0]["nombre"], "Agua");

    let (_, lowercase) = test.get("/api/tipos-recursos?categoria=alimentacion").await;
    assert_eq!(lowercase.as_array().unwrap().len(), 2);

    let (_, all) = test.get("/api/tipos-recursos").await;
    assert_eq!(all.as_array().unwrap().len(), 3);
    assert_eq!(all[0]["nombre"], "Agua");
}

/// Deletion reports the inventory table that still references the type
#[tokio::test]
async fn delete_guard() {
    let test = setup().await;
    let brigade = test
        .create("/api/brigadas", json!({ "nombre": "Brigada Norte" }))
        .await;
    let dog_food = test
        .create(
            "/api/tipos-recursos",
            json!({ "categoria": "RESCATE_ANIMAL", "nombre": "Alimento para perros" }),
        )
        .await;
    test.create(
        "/api/inventario/rescate-animal",
        json!({ "brigada_id": brigade, "tipo_recurso_id": dog_food, "cantidad": 3 }),
    )
    .await;

    let (status, body) = test
        .delete(&format!("/api/tipos-recursos/{}", dog_food))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .ends_with("inventario_rescate_animal"));

    let (status, _) = test.delete("/api/tipos-recursos/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
