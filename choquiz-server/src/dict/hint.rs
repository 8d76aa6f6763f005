//! Definition hint extraction and merging
//!
//! Hints travel as an ordered fragment set internally and only take on
//! the numbered "1. a / 2. b" wire form at the output boundary.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dict::normalize::clean_hint_text;
use crate::dict::record::WordInfo;

/// Display sentinel for entries whose source carries no usable definition.
pub const NO_DEFINITION: &str = "정의 없음";

/// Word-unit tag identifying proverb records.
pub const PROVERB_UNIT: &str = "속담";

/// Marker prefixed onto proverb definitions.
const PROVERB_PREFIX: &str = "속담: ";

/// Separator between fragments in the rendered form.
const FRAGMENT_SEPARATOR: &str = " / ";

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Ordered set of hint fragments.
///
/// Keeps first-seen order and dedups on exact text, so folding a rendered
/// hint into the set that produced it is a no-op.
#[derive(Debug, Default, Clone)]
pub struct HintFragments {
    fragments: Vec<String>,
}

impl HintFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one fragment unless blank or already present.
    pub fn push(&mut self, fragment: String) {
        if !fragment.is_empty() && !self.fragments.contains(&fragment) {
            self.fragments.push(fragment);
        }
    }

    /// Fold a rendered hint back in, stripping any stale numbering.
    pub fn merge_rendered(&mut self, rendered: &str) {
        for part in rendered.split(FRAGMENT_SEPARATOR) {
            self.push(LEADING_NUMBER.replace(part, "").into_owned());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Serialize: `None` when empty, the bare text for one fragment, and
    /// "1. a / 2. b" with fresh 1-based numbering for several.
    pub fn render(&self) -> Option<String> {
        match self.fragments.len() {
            0 => None,
            1 => Some(self.fragments[0].clone()),
            _ => Some(
                self.fragments
                    .iter()
                    .enumerate()
                    .map(|(i, fragment)| format!("{}. {}", i + 1, fragment))
                    .collect::<Vec<_>>()
                    .join(FRAGMENT_SEPARATOR),
            ),
        }
    }
}

/// Derive the hint for one record, or `None` when nothing usable survives
/// cleanup.
///
/// Proverbs prefer the paraphrased `definition` field under a wider length
/// band; ordinary words take the literal `definition_original` under
/// tighter noise limits. A proverb whose senses all fail the proverb band
/// falls through to the ordinary path.
pub fn extract_hint(word_info: &WordInfo) -> Option<String> {
    let mut fragments = HintFragments::new();

    if word_info.word_unit.as_deref() == Some(PROVERB_UNIT) {
        for sense in word_info.senses() {
            let source = sense
                .definition
                .as_deref()
                .or(sense.definition_original.as_deref());
            let Some(raw) = source else { continue };

            let cleaned = clean_hint_text(raw);
            let len = cleaned.chars().count();
            if (5..=200).contains(&len) {
                fragments.push(format!("{}{}", PROVERB_PREFIX, cleaned));
            }
        }
        if let Some(rendered) = fragments.render() {
            return Some(rendered);
        }
    }

    for sense in word_info.senses() {
        let Some(raw) = sense.definition_original.as_deref() else {
            continue;
        };

        let cleaned = clean_hint_text(raw);
        let len = cleaned.chars().count();
        if (1..=160).contains(&len)
            && !cleaned.chars().all(|c| c.is_ascii_digit())
            && !cleaned.contains('<')
            && !cleaned.contains('>')
        {
            fragments.push(cleaned);
        }
    }

    fragments.render()
}
