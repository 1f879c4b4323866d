//! Command handlers.
//!
//! Handlers operate on an already loaded collection; loading and saving is
//! left to the caller.

pub mod config;
pub mod drill;
pub mod passage;

use anyhow::{anyhow, Result};
use verse_core::Collection;

/// Turn a 1-based passage number from the command line into an index.
pub(crate) fn passage_index(collection: &Collection, number: usize) -> Result<usize> {
    let count = collection.passages().len();
    if number == 0 || number > count {
        return Err(anyhow!(
            "no passage numbered {} (collection has {})",
            number,
            count
        ));
    }
    Ok(number - 1)
}
