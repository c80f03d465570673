/// Movie catalogue module
///
/// Architecture:
/// - Domain: the Movie entity
/// - Application: storage port, listing query and seeding command
/// - Infrastructure: Diesel and in-memory repository implementations
/// - Routes: axum handlers rendering the listing page
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy external access
pub use application::{
    ListMoviesHandler, ListMoviesQuery, ListMoviesResult, MoviePredicate, MovieRepository,
    MovieSearchSpecification, SeedMoviesCommand, SeedMoviesHandler,
};
pub use domain::Movie;
pub use infrastructure::{InMemoryMovieRepository, MovieRepositoryImpl};
