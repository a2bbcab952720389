//! Drives the form wizard against a live server over HTTP.

use std::time::Duration;

use brigadas::{
    client::{
        api::{BrigadeApi, ClientError},
        http::HttpBrigadeApi,
        wizard::{Wizard, WizardError, WizardStep},
    },
    model::inventory::Category,
};
use serde_json::json;
use tokio::net::TcpListener;

use crate::{setup, TestApp};

/// Serves the test app on an ephemeral port and returns an API client pointing at it
async fn serve(test: &TestApp) -> HttpBrigadeApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = test.router();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    HttpBrigadeApi::new(format!("http://{}", addr))
}

async fn seed_catalog(test: &TestApp) {
    test.create("/api/tallas", json!({ "codigo": "M", "descripcion": "Mediana" }))
        .await;
    test.create("/api/tallas", json!({ "codigo": "L", "descripcion": "Grande" }))
        .await;
    test.create(
        "/api/tipos-recursos",
        json!({ "categoria": "EPP", "nombre": "Camisa", "requiere_talla": true }),
    )
    .await;
    test.create(
        "/api/tipos-recursos",
        json!({ "categoria": "HERRAMIENTAS", "nombre": "Pala" }),
    )
    .await;
    test.create(
        "/api/tipos-recursos",
        json!({ "categoria": "HERRAMIENTAS", "nombre": "Rastrillo", "activo": false }),
    )
    .await;
}

#[tokio::test]
async fn wizard_submits_new_brigade() {
    let test = setup().await;
    seed_catalog(&test).await;
    let api = serve(&test).await;

    let mut wizard = Wizard::load(&api, None).await.unwrap();
    // Inactive resource types are not offered
    assert_eq!(wizard.catalog().resource_types.len(), 2);

    assert!(matches!(
        wizard.next(),
        Err(WizardError::BrigadeNameRequired)
    ));
    wizard.brigade.nombre = Some("Brigada Sur".to_string());
    wizard.set_size_quantity(Category::Ppe, "Camisa", "M", 3);
    wizard.set_size_quantity(Category::Ppe, "Camisa", "L", 0);
    wizard.set_quantity(Category::Tools, "Pala", 4);
    wizard.category_mut(Category::Tools).notes = Some("Revisar mangos".to_string());

    while wizard.step() != WizardStep::Review {
        wizard.next().unwrap();
    }

    let report = wizard.submit(&api, Duration::ZERO).await.unwrap();
    assert_eq!(report.brigade.nombre, "Brigada Sur");
    assert_eq!(report.items.len(), 2);
    assert_eq!(wizard.brigade_id(), Some(report.brigade.id));

    let inventory = api.get_inventory(report.brigade.id).await.unwrap();
    assert_eq!(inventory.epp.len(), 1);
    assert_eq!(inventory.epp[0].talla_codigo.as_deref(), Some("M"));
    assert_eq!(inventory.herramientas[0].cantidad, 4);
    assert_eq!(
        inventory.herramientas[0].observaciones.as_deref(),
        Some("Revisar mangos")
    );
}

/// Reopening a brigade loads its inventory and a second submission updates rows in place
#[tokio::test]
async fn wizard_edits_existing_brigade() {
    let test = setup().await;
    seed_catalog(&test).await;
    let api = serve(&test).await;

    let mut wizard = Wizard::load(&api, None).await.unwrap();
    wizard.brigade.nombre = Some("Brigada Este".to_string());
    wizard.set_quantity(Category::Tools, "Pala", 2);
    while wizard.next().is_ok() {}
    let first = wizard.submit(&api, Duration::ZERO).await.unwrap();

    let mut wizard = Wizard::load(&api, Some(first.brigade.id)).await.unwrap();
    assert_eq!(wizard.brigade.nombre.as_deref(), Some("Brigada Este"));
    assert_eq!(
        wizard.category(Category::Tools).unwrap().entries["Pala"].quantity,
        2
    );

    wizard.set_quantity(Category::Tools, "Pala", 7);
    while wizard.next().is_ok() {}
    let second = wizard.submit(&api, Duration::from_millis(1)).await.unwrap();

    assert_eq!(second.brigade.id, first.brigade.id);
    assert_eq!(second.items[0].id, first.items[0].id);
    assert_eq!(second.items[0].cantidad, 7);
}

#[tokio::test]
async fn api_errors_carry_the_server_message() {
    let test = setup().await;
    let api = serve(&test).await;

    let err = api.get_brigade(404).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Api {
            status: 404,
            message: "Brigada no encontrada".to_string()
        }
    );
}
