//! Core library for memorizing scripture passages.
//!
//! Provides:
//! - Passage parser turning free-form text into book/chapter/verse/word
//! - Per-word recall history and verse mastery scores
//! - Drill ordering for learn and review sessions
//! - The passage collection with its drill settings

pub mod collection;
pub mod error;
pub mod parser;
pub mod passage;
pub mod sequence;
pub mod verse;
pub mod word;

pub use collection::{Collection, DEFAULT_MASTERY_THRESHOLD, DEFAULT_MISS_LIMIT};
pub use error::{DocumentError, ParseError, Result};
pub use parser::parse;
pub use passage::Passage;
pub use sequence::{
    for_mode, DrillMode, LearnSequence, ReviewSequence, SelectionPolicy, VerseSequence,
};
pub use verse::Verse;
pub use word::{Word, MAX_TRIES};
