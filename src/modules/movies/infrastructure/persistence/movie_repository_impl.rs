use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use std::sync::Arc;
use tokio::task;

use crate::modules::movies::application::ports::{
    MoviePredicate, MovieRepository, MovieSearchSpecification,
};
use crate::modules::movies::domain::Movie;
use crate::modules::movies::infrastructure::models::{MovieModel, NewMovie};
use crate::log_debug;
use crate::schema::movies;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::shared::Database;

/// Diesel-backed movie storage
///
/// Every call borrows its own pooled connection on a blocking thread, so the
/// listing's two queries can run side by side.
pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Translate a specification into a boxed query over `movies`
pub(crate) fn build_movie_query(
    specification: &MovieSearchSpecification,
) -> movies::BoxedQuery<'static, Pg> {
    // Start with base query
    let mut query = movies::table.into_boxed();

    for predicate in specification.predicates() {
        query = match predicate {
            MoviePredicate::TitleContains(fragment) => {
                query.filter(movies::title.like(contains_pattern(fragment)))
            }
            MoviePredicate::GenreEquals(genre) => query.filter(movies::genre.eq(genre.clone())),
        };
    }

    query
}

/// PostgreSQL text columns cannot hold NUL, and binding one is rejected
/// outright, so a predicate carrying it can never match a row.
fn matches_nothing(specification: &MovieSearchSpecification) -> bool {
    specification.predicates().iter().any(|predicate| match predicate {
        MoviePredicate::TitleContains(value) | MoviePredicate::GenreEquals(value) => {
            value.contains('\0')
        }
    })
}

/// `%fragment%` with LIKE wildcards escaped (PostgreSQL's default escape is `\`)
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_specification(
        &self,
        specification: &MovieSearchSpecification,
    ) -> AppResult<Vec<Movie>> {
        if matches_nothing(specification) {
            log_debug!("Filter value contains NUL, skipping movie query");
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);
        let query = build_movie_query(specification);

        let models = task::spawn_blocking(move || -> AppResult<Vec<MovieModel>> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("movies.find_by_specification");

            let rows = query.load::<MovieModel>(&mut conn)?;

            LogContext::db_operation("select", "movies", Some(timer.elapsed_ms()));
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Movie::from).collect())
    }

    async fn distinct_genres(&self) -> AppResult<Vec<String>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<String>> {
            let mut conn = db.get_connection()?;
            let timer = TimedOperation::new("movies.distinct_genres");

            let genres = movies::table
                .select(movies::genre)
                .distinct()
                .load::<String>(&mut conn)?;

            LogContext::db_operation("select distinct genre", "movies", Some(timer.elapsed_ms()));
            Ok(genres)
        })
        .await?
    }

    async fn count(&self) -> AppResult<u64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<u64> {
            let mut conn = db.get_connection()?;
            let count = movies::table.count().get_result::<i64>(&mut conn)?;
            Ok(count as u64)
        })
        .await?
    }

    async fn insert_batch(&self, movies_to_insert: &[Movie]) -> AppResult<usize> {
        if movies_to_insert.is_empty() {
            return Ok(0);
        }

        let db = Arc::clone(&self.db);
        let rows: Vec<NewMovie> = movies_to_insert.iter().map(NewMovie::from).collect();

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;

            let inserted = conn.transaction(|conn| {
                diesel::insert_into(movies::table)
                    .values(&rows)
                    .execute(conn)
            })?;

            LogContext::db_operation("insert", "movies", None);
            Ok(inserted)
        })
        .await?
    }
}
