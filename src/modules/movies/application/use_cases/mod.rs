pub mod list_movies;
pub mod seed_movies;

pub use list_movies::{ListMoviesHandler, ListMoviesQuery, ListMoviesResult};
pub use seed_movies::{SeedMoviesCommand, SeedMoviesHandler, SeedMoviesResult};
