// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lox expression front end.
//!
//! This crate contains the front half of a Lox compiler:
//! - Lexical analysis (tokenization)
//! - Parsing (AST construction)
//! - Printers that render an AST back to text
//!
//! Evaluation is out of scope; the AST produced here is the hand-off point
//! for a future tree-walking interpreter.

pub mod ast;
pub mod printer;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, LiteralValue};
    pub use crate::source_analysis::{Diagnostic, Token, TokenKind, parse_source};
}
