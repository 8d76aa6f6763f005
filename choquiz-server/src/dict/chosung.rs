//! Hangul initial-consonant (chosung) extraction

/// The 19 initial consonants, in Unicode jamo order.
const CHOSUNG_TABLE: [&str; 19] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ",
    "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// First and last code points of the composed Hangul syllable block
const SYLLABLE_FIRST: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;

/// Code points spanned by one initial consonant (21 vowels x 28 finals)
const PER_CHOSUNG: u32 = 588;

/// Extract the initial consonant of each Hangul syllable in `text`.
///
/// Non-Hangul characters contribute nothing. An empty result means the
/// text carries no computable puzzle; callers must discard the candidate.
pub fn chosung(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    for ch in text.chars() {
        let code = ch as u32;
        if (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
            let index = ((code - SYLLABLE_FIRST) / PER_CHOSUNG) as usize;
            result.push(CHOSUNG_TABLE[index].to_string());
        }
    }
    result
}
