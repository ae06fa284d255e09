//! Process configuration.
//!
//! Read once at startup from command-line flags, falling back to environment
//! variables and then to defaults.

use clap::Parser;

/// Store URL used when neither `--database-url` nor `DATABASE_URL` is given.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://postgres:postgres@db:5432/todos";

/// Todo service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "todo_server", version, about = "Todo list HTTP service")]
pub struct ServerConfig {
    /// `PostgreSQL` connection URL (host, port, credentials, database name).
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Address to bind the HTTP listener to.
    #[arg(long, env = "TODO_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP listener to.
    #[arg(long, env = "TODO_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Maximum number of pooled store connections.
    #[arg(long, env = "TODO_POOL_SIZE", default_value_t = 10)]
    pub pool_size: u32,
}

impl ServerConfig {
    /// Returns the `host:port` listener address.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
