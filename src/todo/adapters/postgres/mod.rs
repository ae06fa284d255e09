//! `PostgreSQL` adapters for todo persistence.

mod models;
mod repository;
mod schema;
mod session;

pub use repository::PostgresTodoRepository;
pub use session::{TodoPgPool, TodoPgSession, acquire, connect};
