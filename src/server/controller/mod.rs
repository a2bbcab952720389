//! HTTP controller endpoints for the brigade management API.
//!
//! Axum handlers parse path, query and body input, delegate to the services and turn their
//! results into JSON responses. Every handler is annotated with `utoipa::path` so the
//! OpenAPI document served at `/api/docs` stays in step with the routes.

pub mod brigade;
pub mod index;
pub mod inventory;
pub mod resource_type;
pub mod size;
pub mod util;
