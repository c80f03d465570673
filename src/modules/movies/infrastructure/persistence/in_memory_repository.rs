use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::movies::application::ports::{MovieRepository, MovieSearchSpecification};
use crate::modules::movies::domain::Movie;
use crate::shared::errors::AppResult;

/// Movie storage held in process memory
///
/// Evaluates specifications with `MoviePredicate::matches`, so it shares the
/// listing semantics of the PostgreSQL store. Insertion order is preserved and
/// distinct genres come back in first-seen order.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
}

impl InMemoryMovieRepository {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_by_specification(
        &self,
        specification: &MovieSearchSpecification,
    ) -> AppResult<Vec<Movie>> {
        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|movie| specification.is_satisfied_by(movie))
            .cloned()
            .collect())
    }

    async fn distinct_genres(&self) -> AppResult<Vec<String>> {
        let movies = self.movies.read().await;
        let mut genres: Vec<String> = Vec::new();
        for movie in movies.iter() {
            if !genres.contains(&movie.genre) {
                genres.push(movie.genre.clone());
            }
        }
        Ok(genres)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.movies.read().await.len() as u64)
    }

    async fn insert_batch(&self, movies: &[Movie]) -> AppResult<usize> {
        self.movies.write().await.extend_from_slice(movies);
        Ok(movies.len())
    }
}
