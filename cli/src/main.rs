//! Interactive todo list
//!
//! Entry point for the `todo` binary. Todos are kept in `todos.json` under
//! the platform data directory unless `--data-dir` or `--in-memory` says
//! otherwise.

mod config;
mod shell;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Cli;
use crate::shell::Shell;
use todo_core::todo::TodoManager;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they stay out of the prompt
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=warn,todo_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let backend = cli.backend();
    tracing::info!("Using {}", backend.describe());

    let manager = TodoManager::new(backend.open());
    tracing::info!("Loaded {} todos", manager.count());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(manager, stdin.lock(), stdout.lock());
    shell.run().context("Interactive session failed")?;

    Ok(())
}
