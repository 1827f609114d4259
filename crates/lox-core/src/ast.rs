// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Abstract Syntax Tree (AST) definitions for Lox expressions.
//!
//! The AST is a closed sum type over exactly four node variants. Each node
//! exclusively owns its children, so every tree is finite and acyclic, and
//! no node is mutated after construction.
//!
//! # Adding operations
//!
//! Operations over the tree (the printers, a future evaluator) are written
//! as functions that match exhaustively on [`Expression`]. The variant set
//! is closed, so a new operation never touches these definitions, and a
//! hypothetical new variant would be caught by the compiler at every
//! consuming match.
//!
//! # Example
//!
//! ```
//! use lox_core::ast::{Expression, LiteralValue};
//! use lox_core::source_analysis::{Token, TokenKind};
//!
//! // -123 * (45.67)
//! let expression = Expression::binary(
//!     Expression::unary(
//!         Token::new(TokenKind::Minus, "-", None, 1),
//!         Expression::Literal(LiteralValue::Number(123.0)),
//!     ),
//!     Token::new(TokenKind::Star, "*", None, 1),
//!     Expression::grouping(Expression::Literal(LiteralValue::Number(45.67))),
//! );
//! ```

use ecow::EcoString;

use crate::source_analysis::Token;

/// A Lox expression.
///
/// Binary and unary nodes keep the operator [`Token`] itself, so consuming
/// operations can report the operator's lexeme and line without a separate
/// lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// An infix operation: `left operator right`.
    Binary {
        /// The left operand.
        left: Box<Expression>,
        /// The operator token.
        operator: Token,
        /// The right operand.
        right: Box<Expression>,
    },

    /// A parenthesized expression.
    Grouping {
        /// The inner expression.
        expression: Box<Expression>,
    },

    /// A literal value.
    Literal(LiteralValue),

    /// A prefix operation: `operator right`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand.
        right: Box<Expression>,
    },
}

impl Expression {
    /// Creates a binary node.
    #[must_use]
    pub fn binary(left: Expression, operator: Token, right: Expression) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Creates a grouping node.
    #[must_use]
    pub fn grouping(expression: Expression) -> Self {
        Self::Grouping {
            expression: Box::new(expression),
        }
    }

    /// Creates a unary node.
    #[must_use]
    pub fn unary(operator: Token, right: Expression) -> Self {
        Self::Unary {
            operator,
            right: Box::new(right),
        }
    }
}

/// The value held by a literal node.
///
/// Exactly four kinds of value exist at runtime today; no other type may
/// appear in a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A number (all Lox numbers are `f64`).
    Number(f64),
    /// A string.
    String(EcoString),
    /// A boolean.
    Boolean(bool),
    /// The nil sentinel.
    Nil,
}

impl std::fmt::Display for LiteralValue {
    /// Renders the natural text form: `nil` for the nil sentinel, the
    /// shortest round-trip form for numbers (`1.0` renders as `1`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
        }
    }
}
