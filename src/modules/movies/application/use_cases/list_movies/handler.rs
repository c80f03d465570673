use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::movies::application::ports::MovieRepository;
use crate::shared::{
    application::use_case::Query,
    errors::AppResult,
    utils::logger::{LogContext, TimedOperation},
};

use super::{query::ListMoviesQuery, result::ListMoviesResult};

/// Query handler for the movie listing page
pub struct ListMoviesHandler {
    movie_repository: Arc<dyn MovieRepository>,
}

impl ListMoviesHandler {
    pub fn new(movie_repository: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repository }
    }
}

#[async_trait]
impl Query<ListMoviesQuery, ListMoviesResult> for ListMoviesHandler {
    async fn execute(&self, query: ListMoviesQuery) -> AppResult<ListMoviesResult> {
        LogContext::search_operation(query.search_string(), query.movie_genre(), None);
        let timer = TimedOperation::new("list_movies");

        let specification = query.to_specification();

        // The genre list always covers the whole collection, not just the filtered movies
        let (genres, movies) = tokio::try_join!(
            self.movie_repository.distinct_genres(),
            self.movie_repository.find_by_specification(&specification),
        )?;

        LogContext::search_operation(
            query.search_string(),
            query.movie_genre(),
            Some(movies.len()),
        );
        timer.finish_with_info(&format!("{} genres", genres.len()));

        Ok(ListMoviesResult {
            genres,
            movies,
            search_string: query.search_string().map(str::to_string),
            movie_genre: query.movie_genre().map(str::to_string),
        })
    }
}
