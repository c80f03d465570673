use serde::Serialize;

use crate::modules::movies::domain::Movie;

/// Result of the movie listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMoviesResult {
    /// Distinct genres over the unfiltered collection
    pub genres: Vec<String>,
    pub movies: Vec<Movie>,
    /// Normalized inputs, echoed back for re-rendering the filter form
    pub search_string: Option<String>,
    pub movie_genre: Option<String>,
}
