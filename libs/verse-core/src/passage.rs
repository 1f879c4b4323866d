//! A book/chapter reference with its verses.

use crate::error::Result;
use crate::parser;
use crate::verse::Verse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A memorized passage from one chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub book: String,
    pub chapter: u32,
    pub verses: Vec<Verse>,
}

impl Passage {
    /// Parse raw passage text. See [`parser::parse`].
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse(text)
    }

    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    /// Human-readable reference, e.g. `Romans 6:1` or `2 Corinthians 4:7-10`.
    pub fn reference(&self) -> String {
        match (self.verses.first(), self.verses.last()) {
            (Some(first), Some(last)) if self.verses.len() > 1 => {
                format!("{} {}:{}-{}", self.book, self.chapter, first.num, last.num)
            }
            (Some(first), _) => format!("{} {}:{}", self.book, self.chapter, first.num),
            _ => format!("{} {}", self.book, self.chapter),
        }
    }

    /// Alias of [`Passage::reference`].
    pub fn passage_name(&self) -> String {
        self.reference()
    }

    /// Mean of the verse scores, `None` while any verse lacks one.
    pub fn mastery_score(&self) -> Option<f64> {
        if self.verses.is_empty() {
            return None;
        }
        let mut total = 0.0;
        for verse in &self.verses {
            total += verse.mastery_score()?;
        }
        Some(total / self.verses.len() as f64)
    }

    /// Number of verses at or below `threshold`.
    pub fn mastered_count(&self, threshold: f64) -> usize {
        self.verses
            .iter()
            .filter(|verse| verse.is_mastered(threshold))
            .count()
    }

    pub fn is_mastered(&self, threshold: f64) -> bool {
        !self.verses.is_empty() && self.mastered_count(threshold) == self.verses.len()
    }
}

impl fmt::Display for Passage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:", self.book, self.chapter)?;
        for (idx, verse) in self.verses.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", verse)?;
        }
        Ok(())
    }
}
