//! Shared fixtures for CLI integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::io::Cursor;

use yamp::store::{CollectionStore, StoreError};
use verse_core::Collection;

pub const ROMANS: &str =
    "Romans 6:1 What shall we say then? Are we to continue in sin that grace may abound?";

pub const CORINTHIANS: &str = "2 Corinthians 4:7 But we have this treasure in jars of clay, \
    to show that the surpassing power belongs to God and not to us. \
    8 We are afflicted in every way, but not crushed; perplexed, \
    but not driven to despair; 9 persecuted, but not forsaken; \
    struck down, but not destroyed; 10 always carrying in the body the death of Jesus, \
    so that the life of Jesus may also be manifested in our bodies.";

/// Store that keeps the last saved collection in memory.
#[derive(Default)]
pub struct MemoryStore {
    pub saved: RefCell<Option<Collection>>,
    pub saves: RefCell<usize>,
}

impl CollectionStore for MemoryStore {
    fn load(&self) -> Result<Collection, StoreError> {
        Ok(self.saved.borrow().clone().unwrap_or_default())
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        *self.saved.borrow_mut() = Some(collection.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

/// Input that answers every word of `text` (after the reference) correctly.
pub fn perfect_answers(text: &str) -> String {
    text.split_whitespace()
        .skip_while(|t| !t.contains(':'))
        .skip(1)
        .filter(|t| !t.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|t| t.chars().find(|c| c.is_alphanumeric()))
        .map(|c| format!("{}\n", c))
        .collect()
}

pub fn input(script: &str) -> Cursor<Vec<u8>> {
    Cursor::new(script.as_bytes().to_vec())
}

/// Collection holding the two sample passages.
pub fn sample_collection() -> Collection {
    let mut collection = Collection::new();
    collection.add_passage_text(ROMANS).unwrap();
    collection.add_passage_text(CORINTHIANS).unwrap();
    collection
}
