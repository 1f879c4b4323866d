//! Passage commands: add, list, show, remove.

use super::passage_index;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use verse_core::Collection;

/// Listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct PassageSummary {
    pub number: usize,
    pub reference: String,
    pub verses: usize,
    pub mastered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Read passage text from a file, or stdin for `-`.
pub fn read_source(source: &Path) -> Result<String> {
    if source.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read passage from stdin")?;
        return Ok(text);
    }
    fs::read_to_string(source).with_context(|| format!("failed to read {}", source.display()))
}

/// Parse `text` into a new passage and print the passage list.
pub fn add(collection: &mut Collection, text: &str, out: &mut impl Write) -> Result<()> {
    let idx = collection
        .add_passage_text(text)
        .context("could not add passage")?;
    tracing::info!(reference = %collection.passages()[idx].reference(), "added passage");

    for reference in collection.passage_list() {
        writeln!(out, "{}", reference)?;
    }
    Ok(())
}

pub fn summaries(collection: &Collection) -> Vec<PassageSummary> {
    let threshold = collection.mastery_threshold();
    collection
        .passages()
        .iter()
        .enumerate()
        .map(|(idx, passage)| PassageSummary {
            number: idx + 1,
            reference: passage.reference(),
            verses: passage.verses.len(),
            mastered: passage.mastered_count(threshold),
            score: passage.mastery_score(),
        })
        .collect()
}

pub fn list(collection: &Collection, json: bool, out: &mut impl Write) -> Result<()> {
    let summaries = summaries(collection);
    if json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(out, "no passages yet, add one with `yamp new <file>`")?;
    }
    for s in summaries {
        writeln!(
            out,
            "{:>3}. {} ({}/{} mastered)",
            s.number, s.reference, s.mastered, s.verses
        )?;
    }
    Ok(())
}

pub fn show(collection: &Collection, number: usize, out: &mut impl Write) -> Result<()> {
    let passage = &collection.passages()[passage_index(collection, number)?];
    let threshold = collection.mastery_threshold();

    writeln!(out, "{}", passage.reference())?;
    for verse in &passage.verses {
        let status = match verse.mastery_score() {
            Some(score) if score <= threshold => format!("{:.2} mastered", score),
            Some(score) => format!("{:.2}", score),
            None => "not yet drilled".to_string(),
        };
        writeln!(out, "  {}  [{}]", verse, status)?;
    }
    Ok(())
}

pub fn remove(collection: &mut Collection, number: usize, out: &mut impl Write) -> Result<()> {
    let idx = passage_index(collection, number)?;
    if let Some(passage) = collection.remove_passage(idx) {
        tracing::info!(reference = %passage.reference(), "removed passage");
        writeln!(out, "removed {}", passage.reference())?;
    }
    Ok(())
}
