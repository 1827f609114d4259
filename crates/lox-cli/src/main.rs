// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lox front-end command-line interface.
//!
//! This is the main entry point for the `lox` command.

use clap::{Parser, Subcommand};
use miette::Result;

mod commands;
mod diagnostic;

/// Lox: scanner and parser for the Lox expression language
#[derive(Debug, Parser)]
#[command(name = "lox")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a source file and print its expression tree
    Run {
        /// Source file to parse
        path: String,
    },

    /// Scan a source file and dump its tokens
    Tokens {
        /// Source file to scan
        path: String,
    },

    /// Start an interactive prompt
    Repl,
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Run { path } => commands::run::run(&path),
        Command::Tokens { path } => commands::tokens::dump(&path),
        Command::Repl => commands::repl::run(),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("{e:?}");
            std::process::exit(1);
        }
    }
}

/// Initialises logging from `RUST_LOG` (off by default).
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
}
