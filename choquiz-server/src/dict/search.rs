//! Free-text search with cross-entry hint merging
//!
//! One full archive pass per query; nothing is persisted. The quality
//! filter does not apply here, so every matching headword is surfaced.

use std::collections::HashMap;
use std::path::Path;

use choquiz_common::Result;
use serde::Serialize;

use crate::dict::archive::for_each_json_entry;
use crate::dict::hint::{extract_hint, HintFragments, NO_DEFINITION};
use crate::dict::normalize::clean_word;

/// One merged search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub word: String,
    pub hint: String,
}

/// Scan the archive for headwords containing `query` (case-insensitive,
/// matched against the raw word) and merge definition hints across
/// duplicate headwords.
///
/// Results come back in first-seen scan order. Hint absence stays an
/// internal `Option`; the display sentinel appears only in the output.
pub fn search_dictionary(archive_path: &Path, query: &str) -> Result<Vec<SearchResult>> {
    let needle = query.to_lowercase();

    // first-seen order is kept in `order`; `merged` backs the lookups
    let mut order: Vec<String> = Vec::new();
    let mut merged: HashMap<String, HintFragments> = HashMap::new();

    for_each_json_entry(archive_path, |items| {
        for item in items {
            let Some(word_info) = item.word_info.as_ref() else {
                continue;
            };
            let Some(raw_word) = word_info.word.as_deref() else {
                continue;
            };
            if !raw_word.to_lowercase().contains(&needle) {
                continue;
            }

            let word = clean_word(raw_word);
            let hint = extract_hint(word_info);

            match merged.get_mut(&word) {
                Some(fragments) => {
                    if let Some(hint) = hint {
                        fragments.merge_rendered(&hint);
                    }
                }
                None => {
                    let mut fragments = HintFragments::new();
                    if let Some(hint) = hint {
                        fragments.merge_rendered(&hint);
                    }
                    order.push(word.clone());
                    merged.insert(word, fragments);
                }
            }
        }
    })?;

    Ok(order
        .into_iter()
        .map(|word| {
            let hint = merged[&word]
                .render()
                .unwrap_or_else(|| NO_DEFINITION.to_string());
            SearchResult { word, hint }
        })
        .collect())
}
