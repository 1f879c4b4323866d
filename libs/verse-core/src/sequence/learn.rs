//! Learn mode: unattempted verses first, then by mastery score.

use super::VerseSequence;
use crate::passage::Passage;
use serde::{Deserialize, Serialize};

/// Which fully attempted verse learn mode picks next.
///
/// Scores are average missed guesses, so a higher score is a weaker verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    /// Highest score, i.e. the verse with the most misses.
    #[default]
    MostMissed,
    /// Lowest score, i.e. the verse with the fewest misses.
    LeastMissed,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MostMissed => "most-missed",
            Self::LeastMissed => "least-missed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "most-missed" => Some(Self::MostMissed),
            "least-missed" => Some(Self::LeastMissed),
            _ => None,
        }
    }

    fn prefers(self, candidate: f64, best: f64) -> bool {
        match self {
            Self::MostMissed => candidate > best,
            Self::LeastMissed => candidate < best,
        }
    }
}

/// Unbounded drill order. Never runs out while the passage has verses.
#[derive(Debug, Clone, Default)]
pub struct LearnSequence {
    policy: SelectionPolicy,
}

impl LearnSequence {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }
}

impl VerseSequence for LearnSequence {
    fn name(&self) -> &'static str {
        "learn"
    }

    fn next_verse(&mut self, passage: &Passage) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (idx, verse) in passage.verses.iter().enumerate() {
            let Some(score) = verse.mastery_score() else {
                tracing::debug!(verse = verse.num, "selected unattempted verse");
                return Some(idx);
            };
            match best {
                Some((_, best_score)) if !self.policy.prefers(score, best_score) => {}
                _ => best = Some((idx, score)),
            }
        }

        if let Some((idx, score)) = best {
            tracing::debug!(
                verse = passage.verses[idx].num,
                score,
                policy = self.policy.as_str(),
                "selected verse by score"
            );
        }
        best.map(|(idx, _)| idx)
    }
}
