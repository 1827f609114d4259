// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! `lox tokens` — the debug path: scan a file and dump each token.

use lox_core::source_analysis::scan;
use miette::{Result, miette};
use tracing::debug;

use crate::diagnostic::ReportedDiagnostic;

/// Scans the file at `path` and prints one token per line.
///
/// Tokens are printed even when lexical diagnostics were recorded; the
/// diagnostics follow the dump, and the command then fails.
pub fn dump(path: &str) -> Result<()> {
    let source = super::read_source(path)?;
    let (tokens, diagnostics) = scan(&source);
    debug!(path, count = tokens.len(), "scanned tokens");

    for token in &tokens {
        println!("{token}");
    }

    if diagnostics.is_empty() {
        return Ok(());
    }

    for diagnostic in &diagnostics {
        let report: miette::Report =
            ReportedDiagnostic::from_core_diagnostic(diagnostic, path, &source).into();
        eprintln!("{report:?}");
    }
    Err(miette!(
        "scanning produced {} diagnostic(s)",
        diagnostics.len()
    ))
}
