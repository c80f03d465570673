/// Test helper functions and service builders
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use marquee_lib::modules::movies::{
    InMemoryMovieRepository, ListMoviesHandler, Movie, MovieRepository, MovieSearchSpecification,
};
use marquee_lib::shared::errors::{AppError, AppResult};
use marquee_lib::{build_router, AppState};
use std::sync::Arc;
use tower::ServiceExt;

/// Listing handler over an in-memory catalogue
pub fn build_list_handler(movies: Vec<Movie>) -> ListMoviesHandler {
    let repo: Arc<dyn MovieRepository> = Arc::new(InMemoryMovieRepository::new(movies));
    ListMoviesHandler::new(repo)
}

/// Full router over an in-memory catalogue
pub fn build_test_app(movies: Vec<Movie>) -> Router {
    build_router(AppState::new(Arc::new(build_list_handler(movies))))
}

/// Store whose every call fails as if the database were unreachable
pub struct UnavailableMovieRepository;

#[async_trait]
impl MovieRepository for UnavailableMovieRepository {
    async fn find_by_specification(
        &self,
        _specification: &MovieSearchSpecification,
    ) -> AppResult<Vec<Movie>> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn distinct_genres(&self) -> AppResult<Vec<String>> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn count(&self) -> AppResult<u64> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }

    async fn insert_batch(&self, _movies: &[Movie]) -> AppResult<usize> {
        Err(AppError::DatabaseError("connection refused".to_string()))
    }
}

/// Full router whose store is down
pub fn build_unavailable_app() -> Router {
    let repo: Arc<dyn MovieRepository> = Arc::new(UnavailableMovieRepository);
    build_router(AppState::new(Arc::new(ListMoviesHandler::new(repo))))
}

/// Send a GET request and collect status and body
pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
