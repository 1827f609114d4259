// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `lox run` — parse a source file and print its expression tree.

use lox_core::printer::TreePrinter;
use lox_core::source_analysis::parse_source;
use miette::{Result, miette};
use tracing::debug;

use crate::diagnostic::ReportedDiagnostic;

/// Parses the file at `path` and prints the prefix rendering of its tree.
pub fn run(path: &str) -> Result<()> {
    let source = super::read_source(path)?;
    debug!(path, bytes = source.len(), "parsing source file");

    let (expression, diagnostics) = parse_source(&source);

    if let Some(expression) = expression {
        println!("{}", TreePrinter.print(&expression));
        return Ok(());
    }

    for diagnostic in &diagnostics {
        let report: miette::Report =
            ReportedDiagnostic::from_core_diagnostic(diagnostic, path, &source).into();
        eprintln!("{report:?}");
    }
    Err(miette!(
        "aborting due to {} previous error(s)",
        diagnostics.len()
    ))
}
