//! Persisted data model

use serde::{Deserialize, Serialize};

/// One curated quiz item, as stored in the pool and served to players.
///
/// Immutable once written; removed only by the full-clear operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizEntry {
    /// Cleaned display word
    pub word: String,
    /// Initial-consonant glyphs, one per Hangul syllable in `word`; never empty
    pub question: Vec<String>,
    /// Definition text; "정의 없음" when the source carried none
    pub hint: String,
    /// RFC 3339 creation timestamp, assigned at store-write time
    #[serde(rename = "addedAt")]
    pub added_at: String,
}
