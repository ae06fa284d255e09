//! In-memory repository for todo tests and local runs.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::todo::{
    domain::{NewTodo, Todo, TodoId},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};

/// Thread-safe in-memory todo repository.
///
/// Identifiers start at 1 and are never reused, mirroring a `SERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoRepository {
    state: Arc<RwLock<InMemoryTodoState>>,
}

#[derive(Debug, Default)]
struct InMemoryTodoState {
    todos: BTreeMap<TodoId, Todo>,
    last_id: i32,
}

impl InMemoryTodoRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TodoRepositoryResult<RwLockReadGuard<'_, InMemoryTodoState>> {
        self.state.read().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TodoRepositoryResult<RwLockWriteGuard<'_, InMemoryTodoState>> {
        self.state.write().map_err(|err| {
            TodoRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TodoRepository for InMemoryTodoRepository {
    async fn list(&self) -> TodoRepositoryResult<Vec<Todo>> {
        let state = self.read()?;
        Ok(state.todos.values().cloned().collect())
    }

    async fn store(&self, todo: &NewTodo) -> TodoRepositoryResult<Todo> {
        let mut state = self.write()?;
        let next_id = state.last_id.checked_add(1).ok_or_else(|| {
            TodoRepositoryError::persistence(std::io::Error::other("todo id sequence exhausted"))
        })?;
        state.last_id = next_id;

        let stored = todo.clone().into_todo(TodoId::new(next_id));
        state.todos.insert(stored.id(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: TodoId) -> TodoRepositoryResult<Option<Todo>> {
        let state = self.read()?;
        Ok(state.todos.get(&id).cloned())
    }

    async fn set_completed(&self, id: TodoId, completed: bool) -> TodoRepositoryResult<Todo> {
        let mut state = self.write()?;
        let todo = state
            .todos
            .get_mut(&id)
            .ok_or(TodoRepositoryError::NotFound(id))?;
        todo.set_completed(completed);
        Ok(todo.clone())
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        let mut state = self.write()?;
        state
            .todos
            .remove(&id)
            .map(|_| ())
            .ok_or(TodoRepositoryError::NotFound(id))
    }
}
