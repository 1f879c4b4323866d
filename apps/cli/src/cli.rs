//! Command-line definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use verse_core::{DrillMode, SelectionPolicy};

/// Yet another memorization program.
#[derive(Debug, Parser)]
#[command(name = "yamp", version, about)]
pub struct Cli {
    /// Collection file (defaults to the local data directory).
    #[arg(long, global = true, env = "YAMP_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a passage from a text file ("-" reads stdin).
    New { source: PathBuf },

    /// List passages.
    List {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show a passage with per-verse mastery.
    Show { number: usize },

    /// Remove a passage.
    Remove { number: usize },

    /// Show or change drill settings.
    Config {
        /// Wrong guesses allowed before a word is revealed (minimum 1).
        #[arg(long, allow_negative_numbers = true)]
        miss_limit: Option<i64>,

        /// Score at or below which a verse counts as mastered (minimum 1.0).
        #[arg(long, allow_negative_numbers = true)]
        mastery_threshold: Option<f64>,
    },

    /// Drill a passage.
    Drill {
        number: usize,

        #[arg(long, value_enum, default_value_t = ModeArg::Learn)]
        mode: ModeArg,

        /// Which verse learn mode picks once every verse has been attempted.
        #[arg(long, value_enum, default_value_t = PolicyArg::MostMissed)]
        policy: PolicyArg,

        /// Verses to drill in learn mode.
        #[arg(long)]
        rounds: Option<usize>,
    },
}

impl Command {
    /// Whether the command changes the collection.
    pub fn mutates(&self) -> bool {
        match self {
            Self::New { .. } | Self::Remove { .. } | Self::Drill { .. } => true,
            Self::Config {
                miss_limit,
                mastery_threshold,
            } => miss_limit.is_some() || mastery_threshold.is_some(),
            Self::List { .. } | Self::Show { .. } => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Learn,
    Review,
}

impl From<ModeArg> for DrillMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Learn => Self::Learn,
            ModeArg::Review => Self::Review,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    MostMissed,
    LeastMissed,
}

impl From<PolicyArg> for SelectionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::MostMissed => Self::MostMissed,
            PolicyArg::LeastMissed => Self::LeastMissed,
        }
    }
}
