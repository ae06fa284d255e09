//! HTTP transport for the todo service.
//!
//! # Endpoints
//!
//! - `GET /todos` - list every todo
//! - `POST /addtodo` - create a todo
//! - `DELETE /deletetodo/{todo_id}` - delete a todo
//! - `PUT /todos/{todo_id}/complete` - set the completion flag
//!
//! Every route carries a permissive CORS policy.

pub mod error;
pub mod extract;
pub mod routes;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use routes::todo_routes;
pub use server::{build_router, cors_layer, serve};
