//! Application services for todo orchestration.

mod lifecycle;

pub use lifecycle::{TodoService, TodoServiceError, TodoServiceResult};
