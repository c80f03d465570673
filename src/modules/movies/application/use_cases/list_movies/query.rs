use crate::modules::movies::application::ports::{MoviePredicate, MovieSearchSpecification};

/// Query for the movie listing page
///
/// Empty strings are normalized to `None` so that an empty search box or the
/// "All" genre option never becomes a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListMoviesQuery {
    search_string: Option<String>,
    movie_genre: Option<String>,
}

impl ListMoviesQuery {
    pub fn new(search_string: Option<String>, movie_genre: Option<String>) -> Self {
        Self {
            search_string: search_string.filter(|s| !s.is_empty()),
            movie_genre: movie_genre.filter(|g| !g.is_empty()),
        }
    }

    pub fn search_string(&self) -> Option<&str> {
        self.search_string.as_deref()
    }

    pub fn movie_genre(&self) -> Option<&str> {
        self.movie_genre.as_deref()
    }

    /// Build the movie specification: unconstrained, then one predicate per active filter
    pub fn to_specification(&self) -> MovieSearchSpecification {
        let mut specification = MovieSearchSpecification::all();

        if let Some(search) = &self.search_string {
            specification =
                specification.with_predicate(MoviePredicate::TitleContains(search.clone()));
        }

        if let Some(genre) = &self.movie_genre {
            specification = specification.with_predicate(MoviePredicate::GenreEquals(genre.clone()));
        }

        specification
    }
}
