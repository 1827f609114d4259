// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `lox repl` — an interactive prompt over the expression front end.
//!
//! Each line is scanned and parsed on its own; diagnostics from one line
//! never leak into the next, because the front end keeps no state between
//! calls.

use lox_core::printer::TreePrinter;
use lox_core::source_analysis::parse_source;
use miette::{IntoDiagnostic, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::diagnostic::ReportedDiagnostic;

/// Runs the read-parse-print loop until EOF or interrupt.
pub fn run() -> Result<()> {
    let mut editor = DefaultEditor::new().into_diagnostic()?;
    println!("Lox expression front end. Ctrl-D to exit.");

    loop {
        match editor.readline("lox> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                editor.add_history_entry(&line).into_diagnostic()?;
                evaluate_line(&line);
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(miette::miette!("readline error: {e}")),
        }
    }

    Ok(())
}

/// Parses one line of input and prints the tree or its diagnostics.
fn evaluate_line(line: &str) {
    let (expression, diagnostics) = parse_source(line);

    match expression {
        Some(expression) => {
            debug!("parsed one expression");
            println!("{}", TreePrinter.print(&expression));
        }
        None => {
            for diagnostic in &diagnostics {
                let report: miette::Report =
                    ReportedDiagnostic::from_core_diagnostic(diagnostic, "<repl>", line).into();
                eprintln!("{report:?}");
            }
        }
    }
}
