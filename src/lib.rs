pub mod pricing;
pub mod tabular;
pub mod validation;

use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use pricing::handlers::{calculate_floors, calculate_floors_batch, get_template};
use pricing::models::{CalculateRequest, CalculateResponse, OutputRow, TemplateResponse};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        pricing::handlers::calculate_floors,
        pricing::handlers::calculate_floors_batch,
        pricing::handlers::get_template,
    ),
    components(
        schemas(CalculateRequest, CalculateResponse, OutputRow, TemplateResponse)
    ),
    tags(
        (name = "floors", description = "Promo price floor calculation endpoints")
    ),
    info(
        title = "Promo Price Floor API",
        version = "1.0.0",
        description = "Computes the minimum reference price and past-30-day-low price a seller must maintain so a planned promotional price meets marketplace discount requirements"
    )
)]
struct ApiDoc;

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
pub fn create_router() -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Allow all origins, methods, and headers; the API is read-only advice
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // API routes
        .route("/api/floors", post(calculate_floors))
        .route("/api/floors/batch", post(calculate_floors_batch))
        .route("/api/template", get(get_template))
        .layer(cors)
}
