//! Database initialization
//!
//! Creates the database file and the quiz pool schema on first run;
//! reopening an existing database is a no-op beyond the pragmas.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_quiz_pool_table(&pool).await?;

    Ok(pool)
}

/// Create the quiz pool table (idempotent)
async fn create_quiz_pool_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS quiz_pool (
            key TEXT PRIMARY KEY,
            word TEXT NOT NULL,
            question TEXT NOT NULL,
            hint TEXT NOT NULL,
            added_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // Exact-word lookups back every duplicate check
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_quiz_pool_word ON quiz_pool(word)")
        .execute(pool)
        .await?;

    Ok(())
}
