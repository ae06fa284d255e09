//! Identifier types for the todo domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned identifier of a persisted todo.
///
/// Maps onto the `SERIAL` primary key of the `todos` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i32);

impl TodoId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl From<i32> for TodoId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
