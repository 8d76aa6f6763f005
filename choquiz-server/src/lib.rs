//! choquiz-server library - application state and HTTP router
//!
//! The dictionary pipeline lives under [`dict`]; [`seed`] runs the
//! startup curation pass; [`api`] binds everything to HTTP.

use axum::Router;
use choquiz_common::db::PoolStore;
use std::path::PathBuf;
use std::sync::Arc;

pub mod api;
pub mod dict;
pub mod seed;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Quiz pool store
    pub store: PoolStore,
    /// Zipped dictionary export consumed by search (and seeding at boot)
    pub archive_path: Arc<PathBuf>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: PoolStore, archive_path: PathBuf) -> Self {
        Self {
            store,
            archive_path: Arc::new(archive_path),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;
    use tower_http::cors::CorsLayer;

    Router::new()
        .route("/api/search", get(api::search_words))
        .route("/api/newbatch", get(api::new_batch))
        .route("/api/clear-pool", get(api::clear_pool))
        .route("/api/add-word", get(api::add_word))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
