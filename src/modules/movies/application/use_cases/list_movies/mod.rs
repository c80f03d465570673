mod handler;
mod query;
mod result;

pub use handler::ListMoviesHandler;
pub use query::ListMoviesQuery;
pub use result::ListMoviesResult;
