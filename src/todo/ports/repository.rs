//! Repository port for todo persistence and lookup.

use crate::todo::domain::{NewTodo, Todo, TodoId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for todo repository operations.
pub type TodoRepositoryResult<T> = Result<T, TodoRepositoryError>;

/// Todo persistence contract.
///
/// Every mutating operation is committed before it returns.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Returns every stored todo. Callers must not rely on the order.
    async fn list(&self) -> TodoRepositoryResult<Vec<Todo>>;

    /// Persists a new todo and returns it with its store-assigned identifier.
    async fn store(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo>;

    /// Finds a todo by identifier.
    ///
    /// Returns `None` when the todo does not exist.
    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>>;

    /// Overwrites the completion flag of an existing todo and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoRepositoryResult<Todo>;

    /// Removes a todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::NotFound`] when the todo does not exist.
    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()>;
}

/// Errors returned by todo repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TodoRepositoryError {
    /// The todo was not found.
    #[error("todo not found: {0}")]
    NotFound(TodoId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
