//! Quiz batch drawing endpoint

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rand::seq::SliceRandom;
use serde_json::json;
use tracing::{info, warn};

use choquiz_common::db::QuizEntry;

use crate::AppState;

/// Entries handed out per playable batch.
pub const BATCH_SIZE: usize = 19;

/// GET /api/newbatch
///
/// Draws a shuffled batch from the stored pool; empty pool yields an empty
/// batch.
pub async fn new_batch(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuizEntry>>, BatchError> {
    let mut pool = state
        .store
        .read_all()
        .await
        .map_err(|e| BatchError::Store(e.to_string()))?;

    if pool.is_empty() {
        warn!("Quiz pool is empty");
        return Ok(Json(Vec::new()));
    }

    pool.shuffle(&mut rand::thread_rng());
    pool.truncate(BATCH_SIZE);

    info!("New batch drawn: {} entries", pool.len());
    Ok(Json(pool))
}

/// Batch draw failures
#[derive(Debug)]
pub enum BatchError {
    Store(String),
}

impl IntoResponse for BatchError {
    fn into_response(self) -> Response {
        let BatchError::Store(message) = self;
        let body = Json(json!({ "error": format!("Store error: {}", message) }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
