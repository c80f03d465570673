pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{MoviePredicate, MovieRepository, MovieSearchSpecification};

pub use use_cases::{
    ListMoviesHandler, ListMoviesQuery, ListMoviesResult, SeedMoviesCommand, SeedMoviesHandler,
    SeedMoviesResult,
};
