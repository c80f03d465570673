pub mod movie_repository;

pub use movie_repository::{MoviePredicate, MovieRepository, MovieSearchSpecification};

#[cfg(test)]
pub use movie_repository::MockMovieRepository;
