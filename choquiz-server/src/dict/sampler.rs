//! Chosung-balanced sampling over the full archive
//!
//! Uniform random sampling over-represents common initial consonants, so
//! candidates are grouped by their full chosung sequence and at most one
//! entry is drawn per group.

use std::collections::HashMap;
use std::path::Path;

use choquiz_common::Result;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::dict::archive::for_each_json_entry;
use crate::dict::ingest::{extract_candidates, QuizCandidate};

/// Accumulator mapping a joined chosung sequence to the candidates that
/// share it. Owned by one sampling pass and discarded with it.
#[derive(Debug, Default)]
pub struct ChosungGroups {
    groups: HashMap<String, Vec<QuizCandidate>>,
}

impl ChosungGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, candidate: QuizCandidate) {
        let key = candidate.question.concat();
        self.groups.entry(key).or_default().push(candidate);
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Draw up to `limit` candidates, at most one per chosung group.
    ///
    /// Group keys are shuffled, then one member is picked uniformly from
    /// each visited group. Groups are never revisited, so the result holds
    /// exactly `min(limit, distinct groups)` entries.
    pub fn sample(&self, limit: usize) -> Vec<QuizCandidate> {
        let mut rng = rand::thread_rng();

        let mut keys: Vec<&String> = self.groups.keys().collect();
        keys.shuffle(&mut rng);

        let mut result = Vec::with_capacity(limit.min(keys.len()));
        for key in keys {
            if result.len() >= limit {
                break;
            }
            if let Some(picked) = self.groups[key].choose(&mut rng) {
                result.push(picked.clone());
            }
        }
        result
    }
}

/// Run one full archive pass and draw a chosung-balanced sample.
pub fn load_balanced_sample(archive_path: &Path, limit: usize) -> Result<Vec<QuizCandidate>> {
    let mut groups = ChosungGroups::new();

    for_each_json_entry(archive_path, |items| {
        for candidate in extract_candidates(items) {
            groups.insert(candidate);
        }
    })?;

    debug!(
        "Archive pass complete: {} chosung groups accumulated",
        groups.group_count()
    );

    Ok(groups.sample(limit))
}
