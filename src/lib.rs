pub mod modules;
mod schema;
pub mod server;
pub mod shared;

use modules::movies::{
    ListMoviesHandler, MovieRepository, MovieRepositoryImpl, SeedMoviesCommand, SeedMoviesHandler,
};
use shared::application::UseCase;
use shared::errors::AppResult;
use shared::infrastructure::{run_pending_migrations, AppConfig, Database};
use shared::utils::init_logger;
use std::sync::Arc;

pub use server::{build_router, AppState};

/// Load configuration, prepare the database and serve the movie pages
pub async fn run() -> AppResult<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    log::debug!("Loaded configuration: {:?}", config);

    let database = Arc::new(Database::new(&config.database)?);

    let migrations_db = Arc::clone(&database);
    let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&migrations_db))
        .await??;
    log::info!("Database schema up to date ({} migrations applied)", applied);

    let movie_repo: Arc<dyn MovieRepository> =
        Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));

    if config.seed_database {
        let seeded = SeedMoviesHandler::new(Arc::clone(&movie_repo))
            .execute(SeedMoviesCommand::sample_catalogue()?)
            .await?;
        if !seeded.skipped {
            log::info!("Inserted {} sample movies", seeded.inserted);
        }
    }

    let list_movies = Arc::new(ListMoviesHandler::new(movie_repo));
    let state = AppState::new(list_movies).with_database(database);

    server::serve(config.bind_addr, state).await
}
