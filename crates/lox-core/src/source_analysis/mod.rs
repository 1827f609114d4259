// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical and syntactic analysis for Lox source code.
//!
//! This module contains the scanner, the parser, and the diagnostic types
//! they share. Data flows strictly one way:
//!
//! ```text
//! source text -> scan -> tokens -> parse -> expression tree
//! ```
//!
//! Both passes accumulate [`Diagnostic`]s instead of touching any shared
//! error state, so every invocation is independent and the whole pipeline
//! is an ordinary synchronous function call.
//!
//! ```
//! use lox_core::source_analysis::parse_source;
//!
//! let (expression, diagnostics) = parse_source("1 + 2 * 3");
//! assert!(diagnostics.is_empty());
//! assert!(expression.is_some());
//! ```

mod error;
mod parser;
mod scanner;
mod token;

#[cfg(test)]
mod scanner_property_tests;

pub use error::{Diagnostic, Severity};
pub use parser::parse;
pub use scanner::{Scanner, scan};
pub use token::{Literal, Token, TokenKind};

use crate::ast::Expression;

/// Runs the full front end over one source string.
///
/// Scans, then parses, and merges the diagnostics of both passes. The
/// caller sees exactly one of two outcomes: a tree and no diagnostics, or
/// no tree and at least one diagnostic — a tree is never returned when any
/// error was recorded, even if one could be formed from the salvageable
/// tokens.
#[must_use]
pub fn parse_source(source: &str) -> (Option<Expression>, Vec<Diagnostic>) {
    let (tokens, mut diagnostics) = scan(source);
    let (expression, parse_diagnostics) = parse(tokens);
    diagnostics.extend(parse_diagnostics);

    if diagnostics.is_empty() {
        (expression, diagnostics)
    } else {
        (None, diagnostics)
    }
}
