use axum::extract::State;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::log_info;
use crate::modules::movies::{self, ListMoviesHandler};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::database::{Database, PoolStatus};

/// Shared state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub list_movies: Arc<ListMoviesHandler>,
    /// Absent when the catalogue is not backed by PostgreSQL
    pub database: Option<Arc<Database>>,
}

impl AppState {
    pub fn new(list_movies: Arc<ListMoviesHandler>) -> Self {
        Self {
            list_movies,
            database: None,
        }
    }

    pub fn with_database(mut self, database: Arc<Database>) -> Self {
        self.database = Some(database);
        self
    }
}

/// Single place where every module's routes are mounted
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/Movies") }))
        .route("/health", get(health))
        .merge(movies::routes::router())
        .with_state(state)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub pool: Option<PoolStatus>,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        pool: state.database.as_ref().map(|db| db.pool_status()),
    })
}

/// Bind the listener and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> AppResult<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log_info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
