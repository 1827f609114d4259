// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Lox lexical analysis.
//!
//! This module defines the token types produced by the scanner. Each token
//! consists of:
//! - A [`TokenKind`] classifying the token
//! - The exact source substring it was scanned from (its lexeme)
//! - An optional [`Literal`] value for number and string tokens
//! - The 1-based source line it ends on

use ecow::EcoString;

/// The kind of token, not including lexeme or literal value.
///
/// This is a closed enumeration: Lox has a fixed token vocabulary and no
/// runtime extension point. Number and string values live on [`Token`],
/// so the kind itself stays `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Single-character tokens ===
    /// Left parenthesis: `(`
    LeftParen,
    /// Right parenthesis: `)`
    RightParen,
    /// Left brace: `{`
    LeftBrace,
    /// Right brace: `}`
    RightBrace,
    /// Comma: `,`
    Comma,
    /// Dot: `.`
    Dot,
    /// Minus: `-`
    Minus,
    /// Plus: `+`
    Plus,
    /// Semicolon: `;`
    Semicolon,
    /// Slash: `/`
    Slash,
    /// Star: `*`
    Star,

    // === One or two character tokens ===
    /// Logical not: `!`
    Bang,
    /// Inequality: `!=`
    BangEqual,
    /// Assignment: `=`
    Equal,
    /// Equality: `==`
    EqualEqual,
    /// Greater than: `>`
    Greater,
    /// Greater or equal: `>=`
    GreaterEqual,
    /// Less than: `<`
    Less,
    /// Less or equal: `<=`
    LessEqual,

    // === Literals ===
    /// A name: `foo`, `myVariable`
    Identifier,
    /// A double-quoted string: `"hello"`
    String,
    /// A number literal: `42`, `3.14`
    Number,

    // === Reserved words ===
    /// `and`
    And,
    /// `class`
    Class,
    /// `else`
    Else,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `for`
    For,
    /// `if`
    If,
    /// `nil`
    Nil,
    /// `or`
    Or,
    /// `print`
    Print,
    /// `return`
    Return,
    /// `super`
    Super,
    /// `this`
    This,
    /// `true`
    True,
    /// `var`
    Var,
    /// `while`
    While,

    // === Special ===
    /// End of file
    Eof,
}

impl TokenKind {
    /// Returns `true` if this token kind carries a literal value.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Number | Self::String)
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns `true` if this kind begins a statement (used by the parser
    /// to find a safe point to resume after a syntax error).
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(
            self,
            Self::Class
                | Self::Fun
                | Self::Var
                | Self::For
                | Self::If
                | Self::While
                | Self::Print
                | Self::Return
        )
    }
}

/// The literal value carried by a `Number` or `String` token.
///
/// All Lox numbers are double-precision floats; string values are the
/// source substring with the surrounding quotes trimmed.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A numeric value.
    Number(f64),
    /// A string value (quotes stripped, no escape processing).
    String(EcoString),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// A classified lexeme plus its line and optional literal value.
///
/// Tokens are created once by the scanner and never mutated. The parser
/// moves operator tokens into the AST nodes it builds.
///
/// # Examples
///
/// ```
/// use lox_core::source_analysis::{Token, TokenKind};
///
/// let token = Token::new(TokenKind::Plus, "+", None, 1);
/// assert_eq!(token.kind(), TokenKind::Plus);
/// assert_eq!(token.lexeme(), "+");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    lexeme: EcoString,
    literal: Option<Literal>,
    line: u32,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<EcoString>, literal: Option<Literal>, line: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// Returns the kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the exact source substring this token was scanned from.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Returns the literal value, if this is a number or string token.
    #[must_use]
    pub const fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// Returns the 1-based source line this token ends on.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?} {}", self.kind, self.lexeme),
        }
    }
}
