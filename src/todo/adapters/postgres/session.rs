//! Connection pool construction and per-operation session checkout.
//!
//! A session is a pooled connection. It is handed back to the pool when the
//! guard is dropped, whichever way the owning operation exits.

use crate::todo::ports::{TodoRepositoryError, TodoRepositoryResult};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use std::time::Duration;
use tracing::info;

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// A pooled connection scoped to a single repository operation.
pub type TodoPgSession = PooledConnection<ConnectionManager<PgConnection>>;

/// Upper bound on how long startup waits for the store to accept connections.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds a connection pool for the database at `database_url`.
///
/// Pool construction opens the initial connections, so an unreachable store
/// is reported here rather than on the first request.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when no connection can be
/// established within the connect timeout.
pub async fn connect(database_url: &str, max_size: u32) -> TodoRepositoryResult<TodoPgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = tokio::task::spawn_blocking(move || {
        Pool::builder()
            .max_size(max_size)
            .connection_timeout(CONNECT_TIMEOUT)
            .build(manager)
            .map_err(TodoRepositoryError::persistence)
    })
    .await
    .map_err(TodoRepositoryError::persistence)??;

    info!(max_size, "todo store connection pool ready");
    Ok(pool)
}

/// Checks a session out of the pool. Blocks until a connection is free.
///
/// # Errors
///
/// Returns [`TodoRepositoryError::Persistence`] when the pool cannot supply
/// a connection.
pub fn acquire(pool: &TodoPgPool) -> TodoRepositoryResult<TodoPgSession> {
    pool.get().map_err(TodoRepositoryError::persistence)
}
