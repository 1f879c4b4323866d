//! The passage library and its drill settings.

use crate::error::{DocumentError, Result};
use crate::passage::Passage;
use serde::{Deserialize, Deserializer, Serialize};

/// Default number of wrong guesses before a word is revealed.
pub const DEFAULT_MISS_LIMIT: u32 = 3;

/// Default average-miss score at or below which a verse counts as mastered.
pub const DEFAULT_MASTERY_THRESHOLD: f64 = 1.5;

/// All passages being memorized, plus the drill settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default = "default_miss_limit", deserialize_with = "clamped_miss_limit")]
    miss_limit: u32,
    #[serde(
        default = "default_mastery_threshold",
        deserialize_with = "clamped_mastery_threshold"
    )]
    mastery_threshold: f64,
    #[serde(default)]
    passages: Vec<Passage>,
}

impl Default for Collection {
    fn default() -> Self {
        Self {
            miss_limit: DEFAULT_MISS_LIMIT,
            mastery_threshold: DEFAULT_MASTERY_THRESHOLD,
            passages: Vec::new(),
        }
    }
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a collection document.
    pub fn from_json(json: &str) -> std::result::Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the collection as a pretty-printed document.
    pub fn to_json(&self) -> std::result::Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn miss_limit(&self) -> u32 {
        self.miss_limit
    }

    /// Set the miss limit. Values below 1 become 1.
    pub fn set_miss_limit(&mut self, limit: i64) {
        self.miss_limit = clamp_miss_limit(limit);
    }

    pub fn mastery_threshold(&self) -> f64 {
        self.mastery_threshold
    }

    /// Set the mastery threshold. Values below 1.0 (and NaN) become 1.0.
    pub fn set_mastery_threshold(&mut self, threshold: f64) {
        self.mastery_threshold = clamp_mastery_threshold(threshold);
    }

    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    pub fn passage(&self, idx: usize) -> Option<&Passage> {
        self.passages.get(idx)
    }

    pub fn passage_mut(&mut self, idx: usize) -> Option<&mut Passage> {
        self.passages.get_mut(idx)
    }

    /// Add an already structured passage.
    pub fn add_passage(&mut self, passage: Passage) {
        self.passages.push(passage);
    }

    /// Parse `text` and add the resulting passage. Returns its index.
    pub fn add_passage_text(&mut self, text: &str) -> Result<usize> {
        let passage = Passage::parse(text)?;
        self.passages.push(passage);
        Ok(self.passages.len() - 1)
    }

    pub fn remove_passage(&mut self, idx: usize) -> Option<Passage> {
        if idx < self.passages.len() {
            Some(self.passages.remove(idx))
        } else {
            None
        }
    }

    /// Reference strings for every passage, in order.
    pub fn passage_list(&self) -> Vec<String> {
        self.passages.iter().map(Passage::reference).collect()
    }
}

fn clamp_miss_limit(limit: i64) -> u32 {
    limit.clamp(1, i64::from(u32::MAX)) as u32
}

fn clamp_mastery_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        return 1.0;
    }
    threshold.max(1.0)
}

fn default_miss_limit() -> u32 {
    DEFAULT_MISS_LIMIT
}

fn default_mastery_threshold() -> f64 {
    DEFAULT_MASTERY_THRESHOLD
}

fn clamped_miss_limit<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    i64::deserialize(deserializer).map(clamp_miss_limit)
}

fn clamped_mastery_threshold<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_mastery_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use pretty_assertions::assert_eq;

    const ROMANS: &str =
        "Romans 6:1 What shall we say then? Are we to continue in sin that grace may abound?";

    #[test]
    fn new_collection_defaults() {
        let collection = Collection::new();
        assert!(collection.passages().is_empty());
        assert_eq!(collection.miss_limit(), 3);
        assert_eq!(collection.mastery_threshold(), 1.5);
    }

    #[test]
    fn add_passage_text() {
        let mut collection = Collection::new();
        let idx = collection.add_passage_text(ROMANS).unwrap();
        assert_eq!(idx, 0);
        assert_eq!(collection.passages()[0].to_string(), ROMANS);
        assert_eq!(collection.passage_list(), vec!["Romans 6:1"]);
    }

    #[test]
    fn add_passage_text_propagates_errors() {
        let mut collection = Collection::new();
        let result = collection.add_passage_text("Romans no chapter verse");
        assert!(matches!(result, Err(ParseError::MissingReference)));
        assert!(collection.passages().is_empty());
    }

    #[test]
    fn add_structured_passage() {
        let mut collection = Collection::new();
        collection.add_passage(Passage::parse("2 Corinthians 4:7 But 8 We 9 persecuted, 10 always").unwrap());
        collection.add_passage_text(ROMANS).unwrap();
        assert_eq!(
            collection.passage_list(),
            vec!["2 Corinthians 4:7-10", "Romans 6:1"]
        );
    }

    #[test]
    fn remove_passage() {
        let mut collection = Collection::new();
        collection.add_passage_text(ROMANS).unwrap();
        assert!(collection.remove_passage(1).is_none());
        let removed = collection.remove_passage(0).unwrap();
        assert_eq!(removed.book, "Romans");
        assert!(collection.passages().is_empty());
    }

    #[test]
    fn setters_clamp() {
        let mut collection = Collection::new();
        collection.set_miss_limit(0);
        assert_eq!(collection.miss_limit(), 1);
        collection.set_miss_limit(-4);
        assert_eq!(collection.miss_limit(), 1);
        collection.set_miss_limit(5);
        assert_eq!(collection.miss_limit(), 5);

        collection.set_mastery_threshold(0.2);
        assert_eq!(collection.mastery_threshold(), 1.0);
        collection.set_mastery_threshold(f64::NAN);
        assert_eq!(collection.mastery_threshold(), 1.0);
        collection.set_mastery_threshold(2.25);
        assert_eq!(collection.mastery_threshold(), 2.25);
    }

    #[test]
    fn document_round_trip() {
        let mut collection = Collection::new();
        collection.set_miss_limit(4);
        collection.add_passage_text(ROMANS).unwrap();
        collection.passage_mut(0).unwrap().verses[0].words[2].add_try(1);

        let json = collection.to_json().unwrap();
        let decoded = Collection::from_json(&json).unwrap();
        assert_eq!(decoded, collection);
        assert_eq!(decoded.to_json().unwrap(), json);
    }

    #[test]
    fn document_field_order() {
        let json = serde_json::to_string(&Collection::new()).unwrap();
        assert_eq!(
            json,
            r#"{"miss_limit":3,"mastery_threshold":1.5,"passages":[]}"#
        );
    }

    #[test]
    fn decode_fills_defaults_and_clamps() {
        let collection = Collection::from_json("{}").unwrap();
        assert_eq!(collection, Collection::new());

        let collection =
            Collection::from_json(r#"{"miss_limit":0,"mastery_threshold":0.5,"passages":[]}"#)
                .unwrap();
        assert_eq!(collection.miss_limit(), 1);
        assert_eq!(collection.mastery_threshold(), 1.0);
    }

    #[test]
    fn decode_rejects_malformed_document() {
        let result = Collection::from_json(r#"{"passages":"nope"}"#);
        assert!(matches!(result, Err(DocumentError::Json(_))));
    }
}
