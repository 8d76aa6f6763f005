//! Word-quality gate for the seeding path
//!
//! Applied only during startup ingestion; free-text search surfaces every
//! matching word regardless of quality.

use crate::dict::hint::PROVERB_UNIT;

/// Structural markers betraying non-words in the source vocabulary.
const STRUCTURAL_MARKERS: [char; 3] = ['_', '^', '-'];

/// Origin tags excluded from the quiz pool.
const EXCLUDED_WORD_TYPES: [&str; 2] = ["혼종어", "외래어"];

/// Decide whether a cleaned word qualifies as a quiz pool candidate.
pub fn is_good_word(
    word: &str,
    hint: Option<&str>,
    word_unit: Option<&str>,
    word_type: Option<&str>,
) -> bool {
    if word.is_empty() || word.chars().any(|c| STRUCTURAL_MARKERS.contains(&c)) {
        return false;
    }

    if word_unit == Some(PROVERB_UNIT) {
        let len = word.chars().count();
        return (3..=15).contains(&len) && hint.is_some();
    }

    let len = word.trim().chars().count();
    if !(2..=10).contains(&len) {
        return false;
    }

    !matches!(word_type, Some(t) if EXCLUDED_WORD_TYPES.contains(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structural_markers_always_reject() {
        assert!(!is_good_word("사_랑", Some("뜻"), None, None));
        assert!(!is_good_word("사^랑", Some("뜻"), None, None));
        assert!(!is_good_word("사-랑", Some("뜻"), None, None));
        assert!(!is_good_word(
            "속담_속담",
            Some("뜻"),
            Some(PROVERB_UNIT),
            None
        ));
    }

    #[test]
    fn empty_word_rejects() {
        assert!(!is_good_word("", Some("뜻"), None, None));
    }

    #[test]
    fn ordinary_length_band() {
        assert!(!is_good_word("가", None, None, None));
        assert!(is_good_word("가다", None, None, None));
        assert!(is_good_word(&"가".repeat(10), None, None, None));
        assert!(!is_good_word(&"가".repeat(11), None, None, None));
    }

    #[test]
    fn ordinary_words_need_no_hint() {
        assert!(is_good_word("사랑", None, None, None));
    }

    #[test]
    fn excluded_word_types_reject() {
        assert!(!is_good_word("사랑", Some("뜻"), None, Some("혼종어")));
        assert!(!is_good_word("사랑", Some("뜻"), None, Some("외래어")));
        assert!(is_good_word("사랑", Some("뜻"), None, Some("고유어")));
    }

    #[test]
    fn proverbs_use_their_own_band_and_require_a_hint() {
        let proverb = "말 한마디로 천냥";
        assert!(is_good_word(proverb, Some("뜻"), Some(PROVERB_UNIT), None));
        assert!(!is_good_word(proverb, None, Some(PROVERB_UNIT), None));
        assert!(!is_good_word("가다", Some("뜻"), Some(PROVERB_UNIT), None));
        assert!(!is_good_word(
            &"가".repeat(16),
            Some("뜻"),
            Some(PROVERB_UNIT),
            None
        ));
    }

    #[test]
    fn proverbs_ignore_word_type_exclusions() {
        assert!(is_good_word(
            "말이 씨가 된다",
            Some("뜻"),
            Some(PROVERB_UNIT),
            Some("혼종어")
        ));
    }
}
