//! Router assembly and the serve loop.

use super::todo_routes;
use crate::todo::{ports::TodoRepository, services::TodoService};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Cross-origin policy applied to every route: any origin, method, and header.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the full application router with tracing and CORS layers.
#[must_use]
pub fn build_router<R>(service: TodoService<R>) -> Router
where
    R: TodoRepository + 'static,
{
    todo_routes(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
///
/// # Errors
///
/// Returns an I/O error when accepting connections fails.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "todo service listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
}
