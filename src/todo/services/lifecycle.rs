//! Service layer for creating, listing, completing, and deleting todos.

use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Service-level errors for todo operations.
#[derive(Debug, Error)]
pub enum TodoServiceError {
    /// The referenced todo does not exist.
    #[error("todo not found: {0}")]
    NotFound(TodoId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TodoRepositoryError),
}

impl From<TodoRepositoryError> for TodoServiceError {
    fn from(err: TodoRepositoryError) -> Self {
        match err {
            TodoRepositoryError::NotFound(id) => Self::NotFound(id),
            TodoRepositoryError::Persistence(_) => Self::Repository(err),
        }
    }
}

/// Result type for todo service operations.
pub type TodoServiceResult<T> = Result<T, TodoServiceError>;

/// Todo orchestration service.
///
/// Stateless apart from the shared repository handle, so one instance is
/// cloned into every request.
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> Clone for TodoService<R>
where
    R: TodoRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    /// Creates a new todo service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every stored todo.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the lookup fails.
    pub async fn list(&self) -> TodoServiceResult<Vec<Todo>> {
        let todos = self.repository.list().await?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// Persists a new todo and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::Repository`] when the store rejects the
    /// insert.
    pub async fn create(&self, new_todo: NewTodo) -> TodoServiceResult<Todo> {
        let todo = self.repository.store(&new_todo).await?;
        info!(todo_id = %todo.id(), completed = todo.completed(), "todo added");
        Ok(todo)
    }

    /// Deletes an existing todo. The lookup and the removal are a single
    /// repository call.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no todo has the given
    /// identifier, or [`TodoServiceError::Repository`] when persistence fails.
    pub async fn delete(&self, id: TodoId) -> TodoServiceResult<()> {
        self.repository.delete(id).await?;
        info!(todo_id = %id, "todo deleted");
        Ok(())
    }

    /// Sets the completion flag of an existing todo and returns the updated
    /// record. Only `completed` is touched, in a single repository call.
    ///
    /// # Errors
    ///
    /// Returns [`TodoServiceError::NotFound`] when no todo has the given
    /// identifier, or [`TodoServiceError::Repository`] when persistence fails.
    pub async fn complete(&self, id: TodoId, completed: bool) -> TodoServiceResult<Todo> {
        let todo = self.repository.set_completed(id, completed).await?;
        info!(todo_id = %id, completed, "todo updated");
        Ok(todo)
    }
}
