//! A single memorized token and its recall history.

use serde::{Deserialize, Deserializer, Serialize};

/// Number of recall attempts kept per word.
pub const MAX_TRIES: usize = 10;

/// One word of a verse.
///
/// Each entry in `tries` is the number of wrong letter guesses made before
/// the word was revealed, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    text: String,
    #[serde(default, deserialize_with = "recent_tries")]
    tries: Vec<u32>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tries: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tries(&self) -> &[u32] {
        &self.tries
    }

    /// Record one attempt with `count` missed guesses.
    pub fn add_try(&mut self, count: u32) {
        self.tries.push(count);
        trim_front(&mut self.tries);
    }

    /// Mean missed guesses over the recorded history.
    ///
    /// `None` when the word has never been attempted.
    pub fn try_average(&self) -> Option<f64> {
        if self.tries.is_empty() {
            return None;
        }
        let total: u64 = self.tries.iter().map(|&t| u64::from(t)).sum();
        Some(total as f64 / self.tries.len() as f64)
    }
}

fn trim_front(tries: &mut Vec<u32>) {
    if tries.len() > MAX_TRIES {
        let excess = tries.len() - MAX_TRIES;
        tries.drain(..excess);
    }
}

fn recent_tries<'de, D>(deserializer: D) -> Result<Vec<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let mut tries = Vec::<u32>::deserialize(deserializer)?;
    trim_front(&mut tries);
    Ok(tries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_word_has_no_tries() {
        let word = Word::new("test");
        assert_eq!(word.text(), "test");
        assert!(word.tries().is_empty());
    }

    #[test]
    fn history_keeps_ten_most_recent() {
        let mut word = Word::new("test");
        for count in 1..=11 {
            word.add_try(count);
        }
        assert_eq!(word.tries(), &[2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

        word.add_try(0);
        assert_eq!(word.tries().len(), MAX_TRIES);
        assert_eq!(word.tries()[0], 3);
        assert_eq!(word.tries()[9], 0);
    }

    #[test]
    fn try_average() {
        let mut word = Word::new("test");
        assert_eq!(word.try_average(), None);
        word.add_try(2);
        assert_eq!(word.try_average(), Some(2.0));
        word.add_try(4);
        assert_eq!(word.try_average(), Some(3.0));
    }

    #[test]
    fn zero_average_is_data() {
        let mut word = Word::new("grace");
        word.add_try(0);
        assert_eq!(word.try_average(), Some(0.0));
    }

    #[test]
    fn decode_trims_long_history() {
        let json = r#"{"text":"sin","tries":[1,2,3,4,5,6,7,8,9,10,11,12]}"#;
        let word: Word = serde_json::from_str(json).unwrap();
        assert_eq!(word.tries(), &[3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn decode_without_tries() {
        let word: Word = serde_json::from_str(r#"{"text":"abound?"}"#).unwrap();
        assert_eq!(word.text(), "abound?");
        assert_eq!(word.try_average(), None);
    }
}
