//! Diesel row models for todo persistence.

use super::schema::todos;
use crate::todo::domain::{NewTodo, Todo, TodoId};
use diesel::prelude::*;

/// Query result row for todo records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TodoRow {
    /// Store-assigned identifier.
    pub id: i32,
    /// Description of the work item.
    pub task: String,
    /// Completion flag.
    pub completed: bool,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        Self::from_persisted(TodoId::new(row.id), row.task, row.completed)
    }
}

/// Insert model for todo records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTodoRow<'a> {
    /// Description of the work item.
    pub task: &'a str,
    /// Initial completion flag.
    pub completed: bool,
}

impl<'a> From<&'a NewTodo> for NewTodoRow<'a> {
    fn from(todo: &'a NewTodo) -> Self {
        Self {
            task: todo.description(),
            completed: todo.completed(),
        }
    }
}
