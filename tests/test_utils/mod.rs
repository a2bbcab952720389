//! Shared setup for the integration tests.
//!
//! Every test gets its own in-memory SQLite database with all tables created, wrapped in the
//! same router the binary serves.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use brigadas::server::{
    model::app::AppState,
    router,
    sql::{schema::create_schema, SqlExecutor},
};
use sea_orm::Database;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestApp {
    pub sql: SqlExecutor,
    pub state: AppState,
}

pub async fn setup() -> TestApp {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    let sql = SqlExecutor::new(db).expect("SQLite is a supported backend");

    create_schema(&sql)
        .await
        .expect("Failed to create tables");

    let state = AppState::new(sql.clone());

    TestApp { sql, state }
}

impl TestApp {
    pub fn router(&self) -> Router {
        router::app(self.state.clone())
    }

    /// Sends a request through the full router and returns the status with the JSON body
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Creates a row through the API and returns its id
    pub async fn create(&self, uri: &str, body: Value) -> i64 {
        let (status, created) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::CREATED, "POST {} failed: {}", uri, created);

        created["id"].as_i64().unwrap()
    }
}
