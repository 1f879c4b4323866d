//! Drill settings command.

use anyhow::Result;
use std::io::Write;
use verse_core::Collection;

/// Apply any given settings, then print the current values.
pub fn config(
    collection: &mut Collection,
    miss_limit: Option<i64>,
    mastery_threshold: Option<f64>,
    out: &mut impl Write,
) -> Result<()> {
    if let Some(limit) = miss_limit {
        collection.set_miss_limit(limit);
    }
    if let Some(threshold) = mastery_threshold {
        collection.set_mastery_threshold(threshold);
    }

    writeln!(out, "miss_limit = {}", collection.miss_limit())?;
    writeln!(out, "mastery_threshold = {}", collection.mastery_threshold())?;
    Ok(())
}
