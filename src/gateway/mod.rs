//! HTTP gateway: router, handlers, error mapping, OpenAPI docs.

pub mod alerts;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod openapi;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Build the application router.
///
/// Separate from [`run_server`] so tests can mount the exact production
/// routes on an ephemeral listener.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route(
            "/api/order-lines",
            post(handlers::create_order_line).get(handlers::get_all_order_lines),
        )
        .route(
            "/api/order-lines/{id}",
            put(handlers::update_order_line)
                .patch(handlers::partial_update_order_line)
                .get(handlers::get_order_line)
                .delete(handlers::delete_order_line),
        )
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server.
pub async fn run_server(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", addr, e))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
