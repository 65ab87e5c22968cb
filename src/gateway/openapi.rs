//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::models::{OrderLine, OrderLinePatch};

/// Main API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Supermatech API",
        version = "0.1.0",
        description = "OrderLine REST resource server for the Supermatech store backend.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_order_line,
        crate::gateway::handlers::update_order_line,
        crate::gateway::handlers::partial_update_order_line,
        crate::gateway::handlers::get_all_order_lines,
        crate::gateway::handlers::get_order_line,
        crate::gateway::handlers::delete_order_line,
    ),
    components(
        schemas(OrderLine, OrderLinePatch, HealthResponse)
    ),
    tags(
        (name = "OrderLine", description = "OrderLine CRUD operations"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;
