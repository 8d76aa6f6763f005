//! Free-text dictionary search endpoint

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::{info, warn};

use crate::dict::search::{search_dictionary, SearchResult};
use crate::AppState;

/// Query parameters for free-text search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Substring to match against raw dictionary headwords
    #[serde(default)]
    pub word: String,
}

/// GET /api/search?word=...
///
/// Case-insensitive substring match against raw headwords, with definition
/// hints merged across duplicate headwords. A blank query or an unreadable
/// archive yields an empty list rather than an error.
pub async fn search_words(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<SearchResult>> {
    let needle = query.word.trim().to_string();
    if needle.is_empty() {
        return Json(Vec::new());
    }
    info!("Search requested: \"{}\"", needle);

    // The archive scan is blocking I/O; keep it off the async workers
    let archive_path = state.archive_path.as_ref().clone();
    let outcome =
        tokio::task::spawn_blocking(move || search_dictionary(&archive_path, &needle)).await;

    match outcome {
        Ok(Ok(results)) => {
            info!("Search complete: {} words matched", results.len());
            Json(results)
        }
        Ok(Err(e)) => {
            warn!("Search failed: {}", e);
            Json(Vec::new())
        }
        Err(e) => {
            warn!("Search task failed: {}", e);
            Json(Vec::new())
        }
    }
}
