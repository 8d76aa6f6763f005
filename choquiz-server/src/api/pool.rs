//! Pool management endpoints: add a word, clear the pool

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use choquiz_common::db::{PoolStore, QuizEntry};

use crate::dict::chosung::chosung;
use crate::AppState;

/// Common response body for pool operations
#[derive(Debug, Serialize)]
pub struct PoolOpResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// GET /api/clear-pool
///
/// Removes every stored entry. Irreversible.
pub async fn clear_pool(
    State(state): State<AppState>,
) -> Result<Json<PoolOpResponse>, PoolError> {
    info!("Clearing quiz pool");
    state
        .store
        .clear()
        .await
        .map_err(|e| PoolError::Store(e.to_string()))?;
    info!("Quiz pool cleared");

    Ok(Json(PoolOpResponse {
        success: true,
        message: "퀴즈 풀 전체 삭제 완료".to_string(),
        key: None,
    }))
}

/// Query parameters for add-word
#[derive(Debug, Deserialize)]
pub struct AddWordQuery {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub hint: String,
}

/// GET /api/add-word?word=...&hint=...
///
/// Validates, dedups against the store, and persists a caller-supplied
/// quiz entry. The existence check and the write are not atomic; a
/// concurrent duplicate slipping through is tolerated.
pub async fn add_word(
    State(state): State<AppState>,
    Query(query): Query<AddWordQuery>,
) -> Result<Json<PoolOpResponse>, PoolError> {
    let word = query.word.trim();
    let hint = query.hint.trim();
    info!("Add-word requested: \"{}\"", word);

    if word.is_empty() || hint.is_empty() {
        return Err(PoolError::MissingFields);
    }

    let question = chosung(word);
    if question.is_empty() {
        warn!("Cannot compute chosung for \"{}\"", word);
        return Err(PoolError::NoChosung);
    }
    info!("Chosung for \"{}\": {}", word, question.join(""));

    let exists = state
        .store
        .find_by_word(word)
        .await
        .map_err(|e| PoolError::Store(e.to_string()))?;
    if exists {
        warn!("Duplicate word rejected: \"{}\"", word);
        return Err(PoolError::Duplicate);
    }

    let entry = QuizEntry {
        word: word.to_string(),
        question,
        hint: hint.to_string(),
        added_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    };
    let key = PoolStore::make_key(&entry.word);
    state
        .store
        .put(&key, &entry)
        .await
        .map_err(|e| PoolError::Store(e.to_string()))?;

    let total = state
        .store
        .read_all()
        .await
        .map_err(|e| PoolError::Store(e.to_string()))?
        .len();
    info!("Added \"{}\" to pool ({} total)", entry.word, total);

    Ok(Json(PoolOpResponse {
        success: true,
        message: format!("{} 추가됨 (총 {}개)", entry.word, total),
        key: Some(key),
    }))
}

/// Pool operation failures
#[derive(Debug)]
pub enum PoolError {
    /// word or hint missing from the request
    MissingFields,
    /// the word contains no Hangul syllables to build a puzzle from
    NoChosung,
    /// an entry with this exact word already exists
    Duplicate,
    /// the store call itself failed
    Store(String),
}

impl IntoResponse for PoolError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PoolError::MissingFields => (
                StatusCode::BAD_REQUEST,
                "단어와 뜻이 필요합니다.".to_string(),
            ),
            PoolError::NoChosung => (
                StatusCode::BAD_REQUEST,
                "초성을 추출할 수 없습니다.".to_string(),
            ),
            PoolError::Duplicate => {
                (StatusCode::CONFLICT, "이미 추가된 단어입니다.".to_string())
            }
            PoolError::Store(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("오류 발생: {}", msg),
            ),
        };

        let body = Json(serde_json::json!({
            "success": false,
            "message": message,
        }));
        (status, body).into_response()
    }
}
