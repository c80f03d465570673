// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Shared application layer patterns
pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (config, database, migrations)
pub mod utils; // Shared utilities (logging)

// Re-exports for convenience
pub use infrastructure::config::AppConfig;
pub use infrastructure::database::Database;
