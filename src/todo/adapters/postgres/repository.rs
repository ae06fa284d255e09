//! `PostgreSQL` repository implementation for todo storage.

use super::{
    models::{NewTodoRow, TodoRow},
    schema::todos,
    session::{TodoPgPool, acquire},
};
use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::info;

/// Idempotent DDL for the `todos` table.
const CREATE_TODOS_SQL: &str =
    include_str!("../../../../migrations/2026-10-17-000000_create_todos/up.sql");

/// `PostgreSQL`-backed todo repository.
#[derive(Debug, Clone)]
pub struct PostgresTodoRepository {
    pool: TodoPgPool,
}

impl PostgresTodoRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table and its index when absent.
    ///
    /// Safe to call on every process start.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the store is
    /// unreachable or rejects the DDL.
    pub async fn initialize(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            connection
                .batch_execute(CREATE_TODOS_SQL)
                .map_err(TodoRepositoryError::persistence)
        })
        .await?;
        info!("todos table ready");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut session = acquire(&pool)?;
            f(&mut session)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn list(&self) -> TodoRepositoryResult<Vec<Todo>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .order(todos::id.asc())
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(rows.into_iter().map(Todo::from).collect())
        })
        .await
    }

    async fn store(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let new_todo = todo.clone();
        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(NewTodoRow::from(&new_todo))
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .map(Todo::from)
                .map_err(TodoRepositoryError::persistence)
        })
        .await
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            Ok(row.map(Todo::from))
        })
        .await
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoRepositoryResult<Todo> {
        self.run_blocking(move |connection| {
            let row = diesel::update(todos::table.find(id.value()))
                .set(todos::completed.eq(completed))
                .returning(TodoRow::as_returning())
                .get_result::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(Todo::from).ok_or(TodoRepositoryError::NotFound(id))
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}
