//! Runs the todo HTTP service against `PostgreSQL`.
//!
//! Usage:
//!
//! ```text
//! todo_server [--database-url URL] [--host HOST] [--port PORT] [--pool-size N]
//! ```
//!
//! Each flag falls back to an environment variable (`DATABASE_URL`,
//! `TODO_HOST`, `TODO_PORT`, `TODO_POOL_SIZE`). The process exits with an
//! error before binding the listener when the store is unreachable.

use std::sync::Arc;

use clap::Parser;
use eyre::WrapErr;
use todo_service::config::ServerConfig;
use todo_service::http::{build_router, serve};
use todo_service::telemetry::init_tracing;
use todo_service::todo::adapters::postgres::{PostgresTodoRepository, connect};
use todo_service::todo::services::TodoService;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::parse();
    init_tracing().map_err(|err| eyre::eyre!("install tracing subscriber: {err}"))?;

    let pool = connect(&config.database_url, config.pool_size)
        .await
        .wrap_err("connect to the todo store")?;
    let repository = PostgresTodoRepository::new(pool);
    repository
        .initialize()
        .await
        .wrap_err("initialize the todos table")?;

    let router = build_router(TodoService::new(Arc::new(repository)));
    let listener = TcpListener::bind(config.socket_addr())
        .await
        .wrap_err_with(|| format!("bind {}", config.socket_addr()))?;

    serve(listener, router, shutdown_signal())
        .await
        .wrap_err("serve HTTP requests")?;
    info!("todo service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for ctrl-c; shutting down");
        return;
    }
    info!("shutdown requested");
}
