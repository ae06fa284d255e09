//! Todo entity and its creation payload.

use super::TodoId;

/// A to-do item that has not been persisted yet.
///
/// `completed` defaults to `false` unless set explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    description: String,
    completed: bool,
}

impl NewTodo {
    /// Creates an open todo with the given description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Sets the initial completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Returns the description of the work item.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the initial completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Attaches the identifier assigned by the store.
    #[must_use]
    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            description: self.description,
            completed: self.completed,
        }
    }
}

/// A persisted to-do item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id: TodoId,
    description: String,
    completed: bool,
}

impl Todo {
    /// Reconstructs a todo from persisted storage.
    #[must_use]
    pub fn from_persisted(id: TodoId, description: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            description: description.into(),
            completed,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the description of the work item.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns whether the work item is done.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Sets the completion flag. The description is never changed after
    /// creation.
    pub const fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
