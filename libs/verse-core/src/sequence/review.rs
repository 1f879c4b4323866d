//! Review mode: every verse once, in stored order.

use super::VerseSequence;
use crate::passage::Passage;

/// Finite pass over the verses. Exhausted sequences stay exhausted until
/// [`ReviewSequence::reset`].
#[derive(Debug, Clone, Default)]
pub struct ReviewSequence {
    cursor: usize,
}

impl ReviewSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the pass again from the first verse.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl VerseSequence for ReviewSequence {
    fn name(&self) -> &'static str {
        "review"
    }

    fn next_verse(&mut self, passage: &Passage) -> Option<usize> {
        if self.cursor >= passage.verses.len() {
            return None;
        }
        let idx = self.cursor;
        self.cursor += 1;
        Some(idx)
    }
}
