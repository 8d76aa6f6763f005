//! Typed view of the archive's JSON entries
//!
//! Every level is optional: a truncated or mismatched document yields no
//! items or no senses rather than a hard parse error, so one bad entry
//! never aborts an archive pass.

use serde::Deserialize;

/// Top-level document inside one archive entry.
#[derive(Debug, Deserialize)]
pub struct DictDocument {
    pub channel: Option<Channel>,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    #[serde(default)]
    pub item: Vec<RawItem>,
}

/// One dictionary item wrapping its word record.
#[derive(Debug, Deserialize)]
pub struct RawItem {
    pub word_info: Option<WordInfo>,
}

/// One dictionary word record.
#[derive(Debug, Default, Deserialize)]
pub struct WordInfo {
    /// Raw headword; may carry particle parentheticals, underscores,
    /// carets, or hyphens
    pub word: Option<String>,
    /// Category tag; "속담" marks proverb records
    pub word_unit: Option<String>,
    /// Origin tag, e.g. "혼종어" or "외래어"
    pub word_type: Option<String>,
    #[serde(default)]
    pub pos_info: Vec<PosInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PosInfo {
    #[serde(default)]
    pub comm_pattern_info: Vec<CommPatternInfo>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CommPatternInfo {
    #[serde(default)]
    pub sense_info: Vec<RawSenseInfo>,
}

/// One dictionary sense.
#[derive(Debug, Default, Deserialize)]
pub struct RawSenseInfo {
    pub definition: Option<String>,
    pub definition_original: Option<String>,
}

impl WordInfo {
    /// All senses across pattern and part-of-speech nodes, in document order.
    pub fn senses(&self) -> impl Iterator<Item = &RawSenseInfo> {
        self.pos_info
            .iter()
            .flat_map(|pos| pos.comm_pattern_info.iter())
            .flat_map(|comm| comm.sense_info.iter())
    }
}
