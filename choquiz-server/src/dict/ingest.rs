//! Per-entry candidate extraction

use crate::dict::chosung::chosung;
use crate::dict::filter::is_good_word;
use crate::dict::hint::extract_hint;
use crate::dict::normalize::clean_word;
use crate::dict::record::RawItem;

/// A quiz entry candidate, before the store assigns a timestamp.
#[derive(Debug, Clone)]
pub struct QuizCandidate {
    /// Cleaned display word
    pub word: String,
    /// Initial-consonant glyphs; never empty
    pub question: Vec<String>,
    /// `None` when the record carries no usable definition
    pub hint: Option<String>,
}

/// Extract persistable quiz candidates from one archive entry's items.
///
/// Runs the full gate: normalization, hint extraction, the word-quality
/// filter, and chosung computability.
pub fn extract_candidates(items: &[RawItem]) -> Vec<QuizCandidate> {
    let mut candidates = Vec::new();

    for item in items {
        let Some(word_info) = item.word_info.as_ref() else {
            continue;
        };
        let Some(raw_word) = word_info.word.as_deref() else {
            continue;
        };

        let word = clean_word(raw_word);
        let hint = extract_hint(word_info);

        if !is_good_word(
            &word,
            hint.as_deref(),
            word_info.word_unit.as_deref(),
            word_info.word_type.as_deref(),
        ) {
            continue;
        }

        let question = chosung(&word);
        if question.is_empty() {
            continue;
        }

        candidates.push(QuizCandidate {
            word,
            question,
            hint,
        });
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::record::DictDocument;

    fn items_from(json: &str) -> Vec<RawItem> {
        let doc: DictDocument = serde_json::from_str(json).unwrap();
        doc.channel.unwrap().item
    }

    #[test]
    fn good_record_becomes_a_candidate() {
        let items = items_from(
            r#"{"channel":{"item":[{"word_info":{
                "word":"사랑","word_unit":"단어","word_type":"고유어",
                "pos_info":[{"comm_pattern_info":[{"sense_info":[
                    {"definition_original":"깊은 애정"}
                ]}]}]
            }}]}}"#,
        );

        let candidates = extract_candidates(&items);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word, "사랑");
        assert_eq!(candidates[0].question, vec!["ㅅ", "ㄹ"]);
        assert_eq!(candidates[0].hint.as_deref(), Some("깊은 애정"));
    }

    #[test]
    fn hintless_ordinary_word_still_qualifies() {
        let items = items_from(
            r#"{"channel":{"item":[{"word_info":{"word":"하늘"}}]}}"#,
        );

        let candidates = extract_candidates(&items);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].hint, None);
    }

    #[test]
    fn items_without_a_word_are_skipped() {
        let items = items_from(
            r#"{"channel":{"item":[{"word_info":{"word_unit":"단어"}},{}]}}"#,
        );
        assert!(extract_candidates(&items).is_empty());
    }

    #[test]
    fn filtered_words_are_dropped() {
        let items = items_from(
            r#"{"channel":{"item":[
                {"word_info":{"word":"사_랑"}},
                {"word_info":{"word":"가"}},
                {"word_info":{"word":"사랑","word_type":"외래어"}}
            ]}}"#,
        );
        assert!(extract_candidates(&items).is_empty());
    }

    #[test]
    fn words_without_hangul_are_dropped() {
        // Passes the quality gate on length, but yields no chosung
        let items = items_from(r#"{"channel":{"item":[{"word_info":{"word":"abcd"}}]}}"#);
        assert!(extract_candidates(&items).is_empty());
    }

    #[test]
    fn particle_parenthetical_survives_into_the_candidate() {
        let items = items_from(r#"{"channel":{"item":[{"word_info":{"word":"국수(를)"}}]}}"#);

        let candidates = extract_candidates(&items);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word, "국수를");
        assert_eq!(candidates[0].question, vec!["ㄱ", "ㅅ", "ㄹ"]);
    }
}
