use async_trait::async_trait;

use crate::modules::movies::domain::Movie;
use crate::shared::errors::AppResult;

/// Port (interface) for movie storage following Hexagonal Architecture
/// This is an application layer interface - infrastructure provides the implementation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Load every movie satisfying all predicates of the specification
    async fn find_by_specification(
        &self,
        specification: &MovieSearchSpecification,
    ) -> AppResult<Vec<Movie>>;

    /// Distinct genre values over the whole collection, in store order
    async fn distinct_genres(&self) -> AppResult<Vec<String>>;

    /// Total number of stored movies
    async fn count(&self) -> AppResult<u64>;

    /// Insert movies, returning the number of rows written
    async fn insert_batch(&self, movies: &[Movie]) -> AppResult<usize>;
}

/// A single filter over the movie collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoviePredicate {
    /// Title contains the fragment as a substring
    TitleContains(String),
    /// Genre equals the value exactly
    GenreEquals(String),
}

impl MoviePredicate {
    /// Case-sensitive evaluation, matching PostgreSQL `LIKE` and `=`
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            MoviePredicate::TitleContains(fragment) => movie.title.contains(fragment.as_str()),
            MoviePredicate::GenreEquals(genre) => movie.genre == *genre,
        }
    }
}

/// Specification for movie searches (Specification Pattern)
///
/// Starts unconstrained; predicates are appended and combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieSearchSpecification {
    predicates: Vec<MoviePredicate>,
}

impl MovieSearchSpecification {
    /// Every movie in the store
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_predicate(mut self, predicate: MoviePredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn predicates(&self) -> &[MoviePredicate] {
        &self.predicates
    }

    pub fn is_unconstrained(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn is_satisfied_by(&self, movie: &Movie) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(movie))
    }
}
