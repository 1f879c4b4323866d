//! Parser for raw passage text.
//!
//! # Format
//! ```text
//! 2 Corinthians 4:7 But we have this treasure in jars of clay, ... 8 We are afflicted ...
//! ```
//!
//! The book name comes first (two tokens when the first is a number), then
//! `chapter:verse`. Every later all-digit token starts a new verse; all other
//! tokens are words, kept verbatim with their punctuation.

use crate::error::{ParseError, Result};
use crate::passage::Passage;
use crate::verse::Verse;
use regex::Regex;
use std::sync::OnceLock;

/// Parse passage text into a structured passage.
pub fn parse(text: &str) -> Result<Passage> {
    let mut tokens = text.split_whitespace();

    let book = read_book(&mut tokens)?;
    let (chapter, first_verse) = read_reference(tokens.next())?;

    let mut parser = Parser::new(first_verse);
    for token in tokens {
        parser.process_token(token)?;
    }
    let verses = parser.finalize()?;

    tracing::debug!(%book, chapter, verses = verses.len(), "parsed passage");

    Ok(Passage {
        book,
        chapter,
        verses,
    })
}

fn reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+):(\d+)").expect("reference pattern is valid"))
}

fn read_book<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<String> {
    let first = tokens.next().ok_or(ParseError::EmptyText)?;

    // Numbered books such as "1 Corinthians"
    if is_number(first) {
        let name = tokens.next().ok_or(ParseError::MissingReference)?;
        return Ok(format!("{} {}", first, name));
    }

    Ok(first.to_string())
}

fn read_reference(token: Option<&str>) -> Result<(u32, u32)> {
    let token = token.ok_or(ParseError::MissingReference)?;
    let caps = reference_pattern()
        .captures(token)
        .ok_or(ParseError::MissingReference)?;

    let chapter = parse_number(&caps[1])?;
    let verse = parse_number(&caps[2])?;
    Ok((chapter, verse))
}

fn is_number(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn parse_number(digits: &str) -> Result<u32> {
    let value = digits.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        value: digits.to_string(),
    })?;
    if value == 0 {
        return Err(ParseError::ZeroNumber {
            value: digits.to_string(),
        });
    }
    Ok(value)
}

struct Parser {
    current: Verse,
    verses: Vec<Verse>,
}

impl Parser {
    fn new(first_verse: u32) -> Self {
        Self {
            current: Verse::new(first_verse),
            verses: Vec::new(),
        }
    }

    fn process_token(&mut self, token: &str) -> Result<()> {
        if is_number(token) {
            let next = Verse::new(parse_number(token)?);
            let done = std::mem::replace(&mut self.current, next);
            self.close(done)?;
        } else {
            self.current.add_word(token);
        }
        Ok(())
    }

    fn close(&mut self, verse: Verse) -> Result<()> {
        if verse.words.is_empty() {
            return Err(ParseError::EmptyVerse { num: verse.num });
        }
        self.verses.push(verse);
        Ok(())
    }

    fn finalize(mut self) -> Result<Vec<Verse>> {
        let last = std::mem::replace(&mut self.current, Verse::new(0));
        self.close(last)?;
        Ok(self.verses)
    }
}
