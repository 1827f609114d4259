// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! CLI subcommand implementations.

pub mod repl;
pub mod run;
pub mod tokens;

use miette::{Context, IntoDiagnostic, Result};

/// Reads a source file, attaching the path to any I/O error report.
fn read_source(path: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read '{path}'"))
}
