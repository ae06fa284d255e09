//! Todo service: a minimal task-list HTTP API backed by `PostgreSQL`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the todo entity with no infrastructure dependencies
//! - **Ports**: the repository trait the services depend on
//! - **Adapters**: `PostgreSQL` and in-memory repository implementations
//!
//! # Modules
//!
//! - [`todo`]: Todo domain, persistence, and services
//! - [`http`]: Routes, error mapping, and the serve loop
//! - [`config`]: Startup configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod http;
pub mod telemetry;
pub mod todo;
