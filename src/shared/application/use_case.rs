use crate::shared::errors::AppResult;
/// Base traits for command and query handlers following the CQRS pattern
///
/// # Example
///
/// ```rust,ignore
/// struct ListMoviesHandler {
///     movie_repository: Arc<dyn MovieRepository>,
/// }
///
/// #[async_trait]
/// impl Query<ListMoviesQuery, ListMoviesResult> for ListMoviesHandler {
///     async fn execute(&self, query: ListMoviesQuery) -> AppResult<ListMoviesResult> {
///         // Query logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
