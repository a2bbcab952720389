//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the router with every API endpoint and the Swagger UI.
///
/// # Registered Endpoints
/// - `GET /` - Landing payload
/// - `GET|POST /api/brigadas`, `GET|PUT|DELETE /api/brigadas/{id}`
/// - `GET|POST /api/tallas`, `GET|PUT|DELETE /api/tallas/{id}`
/// - `GET|POST /api/tipos-recursos`, `GET /api/tipos-recursos/categorias`,
///   `GET|PUT|DELETE /api/tipos-recursos/{id}`
/// - `GET /api/inventario/brigada/{brigada_id}`
/// - `POST /api/inventario/{categoria}`, `GET|DELETE /api/inventario/{categoria}/{id}`
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Brigadas",
            description = "Gestión de brigadas forestales, catálogos e inventario"
        ),
        tags(
            (name = controller::brigade::BRIGADE_TAG, description = "Brigade records"),
            (name = controller::size::SIZE_TAG, description = "Clothing and footwear sizes"),
            (name = controller::resource_type::RESOURCE_TYPE_TAG, description = "Resource catalog"),
            (name = controller::inventory::INVENTORY_TAG, description = "Per-brigade inventory by category"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::index::index))
        .routes(routes!(
            controller::brigade::list_brigades,
            controller::brigade::create_brigade
        ))
        .routes(routes!(
            controller::brigade::get_brigade,
            controller::brigade::update_brigade,
            controller::brigade::delete_brigade
        ))
        .routes(routes!(
            controller::size::list_sizes,
            controller::size::create_size
        ))
        .routes(routes!(
            controller::size::get_size,
            controller::size::update_size,
            controller::size::delete_size
        ))
        .routes(routes!(
            controller::resource_type::list_resource_types,
            controller::resource_type::create_resource_type
        ))
        .routes(routes!(controller::resource_type::list_categories))
        .routes(routes!(
            controller::resource_type::get_resource_type,
            controller::resource_type::update_resource_type,
            controller::resource_type::delete_resource_type
        ))
        .routes(routes!(controller::inventory::get_brigade_inventory))
        .routes(routes!(controller::inventory::upsert_inventory_item))
        .routes(routes!(
            controller::inventory::get_inventory_item,
            controller::inventory::delete_inventory_item
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Full application: routes bound to `state`, with request tracing and permissive CORS
pub fn app(state: AppState) -> Router {
    routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
