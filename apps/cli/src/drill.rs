//! Interactive drill loop.
//!
//! The user recalls a verse one word at a time by typing the word's first
//! letter. Each wrong letter is a miss; after `miss_limit` misses the word is
//! shown. Input is line based: the first non-blank character of each line
//! is the guess, blank lines are ignored.

use std::io::{self, BufRead, Write};
use verse_core::{sequence, DrillMode, Passage, SelectionPolicy, Verse, Word};

/// Settings for one drill session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub mode: DrillMode,
    pub policy: SelectionPolicy,
    pub miss_limit: u32,
    pub mastery_threshold: f64,
    /// Verses to drill in learn mode. Defaults to the passage length.
    pub rounds: Option<usize>,
}

/// What happened during a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSummary {
    pub verses_drilled: usize,
    pub words_recorded: usize,
    pub total_misses: u64,
    /// Input ran out before the session finished.
    pub interrupted: bool,
}

/// Result of drilling a single verse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseOutcome {
    Completed { misses: u64, words: usize },
    Interrupted { words: usize, misses: u64 },
}

/// Prompts and reads guesses.
pub struct Drill<R, W> {
    input: R,
    output: W,
    miss_limit: u32,
}

impl<R: BufRead, W: Write> Drill<R, W> {
    pub fn new(input: R, output: W, miss_limit: u32) -> Self {
        Self {
            input,
            output,
            miss_limit: miss_limit.max(1),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Drill every word of `verse`, recording an attempt on each.
    pub fn drill_verse(&mut self, verse: &mut Verse) -> io::Result<VerseOutcome> {
        let num = verse.num;
        let mut misses = 0u64;
        let mut shown: Vec<String> = Vec::with_capacity(verse.words.len());

        for (idx, word) in verse.words.iter_mut().enumerate() {
            let Some(count) = self.guess_word(num, &shown, word)? else {
                return Ok(VerseOutcome::Interrupted { words: idx, misses });
            };
            word.add_try(count);
            misses += u64::from(count);
            shown.push(word.text().to_string());
        }

        writeln!(self.output, "{}", verse)?;
        match verse.mastery_score() {
            Some(score) => writeln!(self.output, "misses: {}  score: {:.2}", misses, score)?,
            None => writeln!(self.output, "misses: {}", misses)?,
        }

        Ok(VerseOutcome::Completed {
            misses,
            words: verse.words.len(),
        })
    }

    /// Missed guesses for one word, or `None` at end of input.
    fn guess_word(&mut self, num: u32, shown: &[String], word: &Word) -> io::Result<Option<u32>> {
        let Some(target) = first_letter(word.text()) else {
            return Ok(Some(0));
        };

        let mut misses = 0;
        while misses < self.miss_limit {
            self.prompt(num, shown)?;
            let Some(guess) = self.read_guess()? else {
                return Ok(None);
            };
            if same_letter(guess, target) {
                return Ok(Some(misses));
            }
            misses += 1;
            writeln!(self.output, "  not '{}' ({}/{})", guess, misses, self.miss_limit)?;
        }

        writeln!(self.output, "  -> {}", word.text())?;
        Ok(Some(misses))
    }

    fn prompt(&mut self, num: u32, shown: &[String]) -> io::Result<()> {
        write!(self.output, "{}", num)?;
        for text in shown {
            write!(self.output, " {}", text)?;
        }
        write!(self.output, " _ ")?;
        self.output.flush()
    }

    fn read_guess(&mut self) -> io::Result<Option<char>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            if let Some(c) = line.chars().find(|c| !c.is_whitespace()) {
                return Ok(Some(c));
            }
        }
    }
}

/// Run a drill session over `passage`, recording attempts into its words.
pub fn run_session<R: BufRead, W: Write>(
    passage: &mut Passage,
    settings: &SessionSettings,
    drill: &mut Drill<R, W>,
) -> io::Result<SessionSummary> {
    let mut seq = sequence::for_mode(settings.mode, settings.policy);
    let rounds = settings.rounds.unwrap_or(passage.verses.len());
    let mut summary = SessionSummary::default();

    tracing::info!(
        passage = %passage.reference(),
        mode = settings.mode.as_str(),
        sequence = seq.name(),
        "starting drill"
    );

    loop {
        if settings.mode == DrillMode::Learn && summary.verses_drilled >= rounds {
            break;
        }
        let Some(idx) = seq.next_verse(passage) else {
            break;
        };

        let verse = &mut passage.verses[idx];
        writeln!(drill.output, "-- {} {}:{} --", passage.book, passage.chapter, verse.num)?;
        match drill.drill_verse(verse)? {
            VerseOutcome::Completed { misses, words } => {
                summary.verses_drilled += 1;
                summary.words_recorded += words;
                summary.total_misses += misses;
            }
            VerseOutcome::Interrupted { words, misses } => {
                summary.words_recorded += words;
                summary.total_misses += misses;
                summary.interrupted = true;
                break;
            }
        }

        if settings.mode == DrillMode::Learn && passage.is_mastered(settings.mastery_threshold) {
            writeln!(drill.output, "{} mastered", passage.reference())?;
            break;
        }
    }

    tracing::info!(
        verses = summary.verses_drilled,
        misses = summary.total_misses,
        interrupted = summary.interrupted,
        "drill finished"
    );
    Ok(summary)
}

fn first_letter(text: &str) -> Option<char> {
    text.chars().find(|c| c.is_alphanumeric())
}

fn same_letter(a: char, b: char) -> bool {
    a.to_lowercase().eq(b.to_lowercase())
}
