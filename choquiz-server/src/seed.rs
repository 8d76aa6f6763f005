//! Startup pool seeding
//!
//! Idempotent and append-only: samples a chosung-balanced handful from the
//! archive and writes only words the pool has never seen. Existing entries
//! are never updated or removed.

use std::collections::HashSet;
use std::path::Path;

use choquiz_common::db::{PoolStore, QuizEntry};
use choquiz_common::{Error, Result};
use tracing::{debug, info};

use crate::dict::hint::NO_DEFINITION;
use crate::dict::sampler::load_balanced_sample;

/// Candidates drawn from the archive per boot.
pub const SEED_LIMIT: usize = 7;

/// Seed the quiz pool from the dictionary archive; returns the number of
/// newly written entries.
///
/// The exists-check and the write are not atomic. A concurrent add-word
/// call can slip a duplicate through; that is tolerated rather than locked
/// against.
pub async fn seed_pool(store: &PoolStore, archive_path: &Path) -> Result<usize> {
    let existing = store.read_all().await?;
    info!("Current pool: {} entries", existing.len());

    let archive = archive_path.to_path_buf();
    let sampled =
        tokio::task::spawn_blocking(move || load_balanced_sample(&archive, SEED_LIMIT))
            .await
            .map_err(|e| Error::Internal(format!("sampling task failed: {}", e)))??;
    info!("Archive sample: {} candidates", sampled.len());

    let mut seen_this_run = HashSet::new();
    let mut saved = 0usize;

    for candidate in sampled {
        let normalized = candidate.word.trim().to_string();
        if normalized.is_empty() || !seen_this_run.insert(normalized.clone()) {
            continue;
        }

        if store.find_by_word(&normalized).await? {
            debug!("Skipping \"{}\": already in pool", normalized);
            continue;
        }

        let entry = QuizEntry {
            word: candidate.word,
            question: candidate.question,
            hint: candidate
                .hint
                .unwrap_or_else(|| NO_DEFINITION.to_string()),
            added_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        };
        store.put(&PoolStore::make_key(&entry.word), &entry).await?;
        saved += 1;
        debug!("Seeded \"{}\"", entry.word);
    }

    let total = store.read_all().await?.len();
    info!("Seeding complete: {} new entries, {} total", saved, total);

    Ok(saved)
}
