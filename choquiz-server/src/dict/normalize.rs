//! Raw dictionary text cleanup

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Grammatical particles kept verbatim when parenthesized in a headword,
/// e.g. "먹(을)" becomes "먹을" while any other parenthetical is dropped.
const KEPT_PARTICLES: [&str; 10] = ["을", "를", "이", "가", "와", "과", "은", "는", "도", "만"];

static PAREN_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)").unwrap());
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());
static LONG_DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{5,}").unwrap());
static QUOTED_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"'[^']*'").unwrap());
static BRACKET_GLYPHS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\[\]「」『』()]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip parenthetical groups from a raw headword.
///
/// A parenthesized particle from the closed set survives with its
/// parentheses removed; any other parenthetical content is deleted.
pub fn clean_word(raw: &str) -> String {
    let cleaned = PAREN_GROUP.replace_all(raw, |caps: &Captures| {
        let content = &caps[1];
        if content.chars().count() <= 2 && KEPT_PARTICLES.contains(&content) {
            content.to_string()
        } else {
            String::new()
        }
    });
    cleaned.trim().to_string()
}

/// Scrub dictionary markup out of a definition string.
///
/// Drops tags, 5+ digit runs (internal ids), and single-quoted spans, then
/// flattens bracket glyphs and whitespace runs. May return an empty string.
pub fn clean_hint_text(raw: &str) -> String {
    let text = MARKUP_TAG.replace_all(raw, "");
    let text = LONG_DIGIT_RUN.replace_all(&text, "");
    let text = QUOTED_SPAN.replace_all(&text, "");
    let text = BRACKET_GLYPHS.replace_all(&text, " ");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_parenthetical_is_kept_without_parens() {
        assert_eq!(clean_word("먹(을)"), "먹을");
        assert_eq!(clean_word("국수(를)"), "국수를");
    }

    #[test]
    fn non_particle_parenthetical_is_dropped() {
        assert_eq!(clean_word("먹(스튜)"), "먹");
        assert_eq!(clean_word("사랑(01)"), "사랑");
    }

    #[test]
    fn plain_words_pass_through_trimmed() {
        assert_eq!(clean_word("  사랑  "), "사랑");
        assert_eq!(clean_word("사랑"), "사랑");
    }

    #[test]
    fn multiple_parentheticals_each_judged() {
        assert_eq!(clean_word("밥(을) 먹다(크게)"), "밥을 먹다");
    }

    #[test]
    fn hint_markup_is_scrubbed() {
        assert_eq!(clean_hint_text("<FL>깊은</FL> 애정"), "깊은 애정");
        assert_eq!(clean_hint_text("뜻 12345678 풀이"), "뜻 풀이");
        assert_eq!(clean_hint_text("'옛말' 그대로"), "그대로");
    }

    #[test]
    fn hint_brackets_become_spaces_and_collapse() {
        assert_eq!(clean_hint_text("「사랑」의_뜻(정의)"), "사랑 의 뜻 정의");
    }

    #[test]
    fn hint_can_clean_to_empty() {
        assert_eq!(clean_hint_text("<tag>'quoted'</tag>"), "");
        assert_eq!(clean_hint_text("   "), "");
    }

    #[test]
    fn short_digit_runs_survive() {
        assert_eq!(clean_hint_text("1910년의 사건"), "1910년의 사건");
    }
}
