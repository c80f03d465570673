use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::database::Database;
use crate::log_info;
use crate::shared::errors::{AppError, AppResult};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Apply any migrations the database has not seen yet
pub fn run_pending_migrations(database: &Database) -> AppResult<usize> {
    let mut conn = database.get_connection()?;

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;

    for version in &applied {
        log_info!("Applied migration {}", version);
    }

    Ok(applied.len())
}
