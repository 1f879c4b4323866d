//! Drill command.

use super::passage_index;
use crate::drill::{run_session, Drill, SessionSettings, SessionSummary};
use anyhow::Result;
use std::io::{BufRead, Write};
use verse_core::{Collection, DrillMode, SelectionPolicy};

/// Drill passage `number`, recording attempts into the collection.
pub fn drill<R: BufRead, W: Write>(
    collection: &mut Collection,
    number: usize,
    mode: DrillMode,
    policy: SelectionPolicy,
    rounds: Option<usize>,
    input: R,
    output: W,
) -> Result<SessionSummary> {
    let idx = passage_index(collection, number)?;
    let settings = SessionSettings {
        mode,
        policy,
        miss_limit: collection.miss_limit(),
        mastery_threshold: collection.mastery_threshold(),
        rounds,
    };

    let mut session = Drill::new(input, output, settings.miss_limit);
    let Some(passage) = collection.passage_mut(idx) else {
        return Ok(SessionSummary::default());
    };
    let summary = run_session(passage, &settings, &mut session)?;

    let mut output = session.into_output();
    writeln!(
        output,
        "drilled {} verse(s), {} word(s), {} miss(es)",
        summary.verses_drilled, summary.words_recorded, summary.total_misses
    )?;
    Ok(summary)
}
