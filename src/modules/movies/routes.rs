//! HTTP surface of the movies module: the listing page and its JSON twin.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use super::application::{ListMoviesQuery, ListMoviesResult};
use crate::server::AppState;
use crate::shared::application::use_case::Query as QueryHandler;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_warn};

/// Query-string parameters of the listing, named as the page form submits them
#[derive(Debug, Default, Deserialize)]
pub struct MovieListingParams {
    #[serde(rename = "SearchString", alias = "searchString")]
    pub search_string: Option<String>,
    #[serde(rename = "MovieGenre", alias = "movieGenre")]
    pub movie_genre: Option<String>,
}

impl From<MovieListingParams> for ListMoviesQuery {
    fn from(params: MovieListingParams) -> Self {
        ListMoviesQuery::new(params.search_string, params.movie_genre)
    }
}

/// A query string that fails to parse means "no filter", never a 400
fn listing_query(params: Result<Query<MovieListingParams>, QueryRejection>) -> ListMoviesQuery {
    match params {
        Ok(Query(params)) => params.into(),
        Err(rejection) => {
            log_warn!("Ignoring malformed listing parameters: {}", rejection);
            ListMoviesQuery::default()
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Movies", get(movies_index))
        .route("/api/movies", get(list_movies_json))
}

/// Template for the movie listing page.
///
/// Renders `templates/movies/index.html`: genre dropdown, title search box and
/// the table of matching movies.
#[derive(Template, WebTemplate)]
#[template(path = "movies/index.html")]
pub struct MoviesIndexTemplate {
    pub search_string: String,
    pub genres: Vec<GenreOption>,
    pub movies: Vec<MovieRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreOption {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct MovieRow {
    pub title: String,
    pub release_date: String,
    pub genre: String,
    pub price: String,
}

impl From<ListMoviesResult> for MoviesIndexTemplate {
    fn from(result: ListMoviesResult) -> Self {
        let selected = result.movie_genre.as_deref();
        let genres = result
            .genres
            .into_iter()
            .map(|name| GenreOption {
                selected: selected == Some(name.as_str()),
                name,
            })
            .collect();

        let movies = result
            .movies
            .into_iter()
            .map(|movie| MovieRow {
                title: movie.title,
                release_date: movie.release_date.format("%Y-%m-%d").to_string(),
                genre: movie.genre,
                price: movie.price.with_scale(2).to_string(),
            })
            .collect();

        Self {
            search_string: result.search_string.unwrap_or_default(),
            genres,
            movies,
        }
    }
}

/// Generic error page shown when the listing cannot be produced.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
}

/// Page-route error: same mapping as `AppError`, rendered as HTML
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        log_error!("Movies page failed: {}", self.0);
        (
            status,
            ErrorTemplate {
                status: status.as_u16(),
            },
        )
            .into_response()
    }
}

/// Renders the movie listing page.
///
/// # Endpoint
///
/// `GET /Movies?SearchString=..&MovieGenre=..`
pub async fn movies_index(
    State(state): State<AppState>,
    params: Result<Query<MovieListingParams>, QueryRejection>,
) -> Result<MoviesIndexTemplate, PageError> {
    let result = state.list_movies.execute(listing_query(params)).await?;
    Ok(result.into())
}

/// Same listing as JSON.
///
/// # Endpoint
///
/// `GET /api/movies?SearchString=..&MovieGenre=..`
pub async fn list_movies_json(
    State(state): State<AppState>,
    params: Result<Query<MovieListingParams>, QueryRejection>,
) -> AppResult<Json<ListMoviesResult>> {
    let result = state.list_movies.execute(listing_query(params)).await?;
    Ok(Json(result))
}
