use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::movies::application::ports::MovieRepository;
use crate::shared::{application::use_case::UseCase, errors::AppResult};
use crate::{log_debug, log_info};

use super::{command::SeedMoviesCommand, result::SeedMoviesResult};

/// Inserts the command's movies only when the catalogue is empty
pub struct SeedMoviesHandler {
    movie_repository: Arc<dyn MovieRepository>,
}

impl SeedMoviesHandler {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }
}

#[async_trait]
impl UseCase<SeedMoviesCommand, SeedMoviesResult> for SeedMoviesHandler {
    async fn execute(&self, command: SeedMoviesCommand) -> AppResult<SeedMoviesResult> {
        let existing = self.movie_repository.count().await?;
        if existing > 0 {
            log_debug!("Catalogue already holds {} movies, skipping seed", existing);
            return Ok(SeedMoviesResult {
                inserted: 0,
                skipped: true,
            });
        }

        let inserted = self.movie_repository.insert_batch(&command.movies).await?;
        log_info!("Seeded catalogue with {} movies", inserted);

        Ok(SeedMoviesResult {
            inserted,
            skipped: false,
        })
    }
}
