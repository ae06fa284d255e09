//! Domain model for to-do items.
//!
//! Identifiers are assigned by the store, so a todo that has not been
//! persisted yet is modelled separately as a [`NewTodo`].

mod ids;
mod todo;

pub use ids::TodoId;
pub use todo::{NewTodo, Todo};
