//! Quiz pool persistence
//!
//! The store deliberately exposes only the four operations the service
//! consumes: exact-word lookup, single-key write, full scan, and full
//! clear. Key uniqueness is the caller's responsibility; `make_key`
//! combines the word with the creation instant.

use crate::db::models::QuizEntry;
use crate::{Error, Result};
use sqlx::SqlitePool;

/// Keyed store of accepted quiz entries.
#[derive(Clone)]
pub struct PoolStore {
    db: SqlitePool,
}

impl PoolStore {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// Exact-match existence check on the stored word.
    pub async fn find_by_word(&self, word: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM quiz_pool WHERE word = ?")
            .bind(word)
            .fetch_one(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Write one entry under a caller-chosen unique key.
    pub async fn put(&self, key: &str, entry: &QuizEntry) -> Result<()> {
        let question = serde_json::to_string(&entry.question)
            .map_err(|e| Error::Internal(format!("cannot encode question glyphs: {}", e)))?;

        sqlx::query(
            "INSERT INTO quiz_pool (key, word, question, hint, added_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(key)
        .bind(&entry.word)
        .bind(question)
        .bind(&entry.hint)
        .bind(&entry.added_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    /// Read every stored entry.
    pub async fn read_all(&self) -> Result<Vec<QuizEntry>> {
        let rows = sqlx::query_as::<_, (String, String, String, String)>(
            "SELECT word, question, hint, added_at FROM quiz_pool ORDER BY added_at",
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|(word, question, hint, added_at)| {
                let question = serde_json::from_str(&question).map_err(|e| {
                    Error::Internal(format!("corrupt question column for \"{}\": {}", word, e))
                })?;
                Ok(QuizEntry {
                    word,
                    question,
                    hint,
                    added_at,
                })
            })
            .collect()
    }

    /// Delete every stored entry. Irreversible.
    pub async fn clear(&self) -> Result<()> {
        sqlx::query("DELETE FROM quiz_pool").execute(&self.db).await?;
        Ok(())
    }

    /// Store key for a new entry: word plus creation instant, which keeps
    /// keys unique across repeated adds of distinct words.
    pub fn make_key(word: &str) -> String {
        format!("{}_{}", word, chrono::Utc::now().timestamp_millis())
    }
}
