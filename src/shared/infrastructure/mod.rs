/// Shared infrastructure concerns
///
/// Configuration, the connection pool and schema migrations used by every module.
pub mod config;
pub mod database;
pub mod migrations;

// Re-exports for convenience
pub use config::{AppConfig, DatabaseConfig};
pub use database::{Database, DbConnection, DbPool, PoolStatus};
pub use migrations::run_pending_migrations;
