//! Drill ordering over a passage's verses.
//!
//! Sequences hand back verse indices rather than references, so the caller
//! is free to record attempts on the passage between pulls. Scores are read
//! fresh on every pull.

pub mod learn;
pub mod review;

pub use learn::{LearnSequence, SelectionPolicy};
pub use review::ReviewSequence;

use crate::passage::Passage;
use serde::{Deserialize, Serialize};

/// Trait for drill orderings.
pub trait VerseSequence {
    /// Sequence identifier.
    fn name(&self) -> &'static str;

    /// Index into `passage.verses` of the next verse to drill, or `None`
    /// when the sequence has nothing more to offer.
    fn next_verse(&mut self, passage: &Passage) -> Option<usize>;
}

/// Drill mode options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillMode {
    #[default]
    Learn,
    Review,
}

impl DrillMode {
    /// Get the mode name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Learn => "learn",
            Self::Review => "review",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "learn" => Some(Self::Learn),
            "review" => Some(Self::Review),
            _ => None,
        }
    }
}

/// Build the sequence for a drill mode. `policy` only applies to learn mode.
pub fn for_mode(mode: DrillMode, policy: SelectionPolicy) -> Box<dyn VerseSequence> {
    match mode {
        DrillMode::Learn => Box::new(LearnSequence::new(policy)),
        DrillMode::Review => Box::new(ReviewSequence::new()),
    }
}
