//! Command-line front end for verse-core.
//!
//! Loads the collection, dispatches one command, and saves the collection
//! again when the command changed it.

pub mod cli;
pub mod commands;
pub mod drill;
pub mod store;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use store::{default_collection_path, CollectionStore, JsonFileStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verse_core::Collection;

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::new(cli.file.clone().unwrap_or_else(default_collection_path));

    let mut collection = store
        .load()
        .with_context(|| format!("failed to load {}", store.path().display()))?;

    let stdout = io::stdout();
    execute(cli.command, &mut collection, &store, stdout.lock())
}

/// Run one command against `collection`, saving through `store` if it changed.
pub fn execute(
    command: Command,
    collection: &mut Collection,
    store: &impl CollectionStore,
    mut out: impl Write,
) -> Result<()> {
    let mutates = command.mutates();

    match command {
        Command::New { source } => {
            let text = commands::passage::read_source(&source)?;
            commands::passage::add(collection, &text, &mut out)?;
        }
        Command::List { json } => commands::passage::list(collection, json, &mut out)?,
        Command::Show { number } => commands::passage::show(collection, number, &mut out)?,
        Command::Remove { number } => commands::passage::remove(collection, number, &mut out)?,
        Command::Config {
            miss_limit,
            mastery_threshold,
        } => commands::config::config(collection, miss_limit, mastery_threshold, &mut out)?,
        Command::Drill {
            number,
            mode,
            policy,
            rounds,
        } => {
            let stdin = io::stdin();
            commands::drill::drill(
                collection,
                number,
                mode.into(),
                policy.into(),
                rounds,
                stdin.lock(),
                &mut out,
            )?;
        }
    }

    if mutates {
        store.save(collection).context("failed to save collection")?;
    }
    Ok(())
}
