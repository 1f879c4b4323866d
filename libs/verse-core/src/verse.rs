//! A numbered verse and its mastery score.

use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered run of words under a verse number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    pub num: u32,
    pub words: Vec<Word>,
}

impl Verse {
    pub fn new(num: u32) -> Self {
        Self {
            num,
            words: Vec::new(),
        }
    }

    pub fn add_word(&mut self, text: impl Into<String>) {
        self.words.push(Word::new(text));
    }

    /// Word texts in order.
    pub fn word_list(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }

    /// Mean of the per-word averages.
    ///
    /// A single unattempted word leaves the whole verse without a score.
    pub fn mastery_score(&self) -> Option<f64> {
        if self.words.is_empty() {
            return None;
        }
        let mut total = 0.0;
        for word in &self.words {
            total += word.try_average()?;
        }
        Some(total / self.words.len() as f64)
    }

    /// Whether the verse has a score at or below `threshold` missed guesses.
    pub fn is_mastered(&self, threshold: f64) -> bool {
        self.mastery_score().is_some_and(|score| score <= threshold)
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.num)?;
        for word in &self.words {
            write!(f, " {}", word.text())?;
        }
        Ok(())
    }
}
