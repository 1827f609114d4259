// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Lox source code.
//!
//! This module converts source text into a sequence of [`Token`]s in a
//! single left-to-right pass. The scanner is hand-written for maximum
//! control over error recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: scanning always completes; an unexpected character
//!   or unterminated string records a [`Diagnostic`] and the pass continues
//! - **Maximal munch**: the longest possible token wins at every position
//!   before classification (so `classy` is one identifier, not `class` + `y`)
//! - **EOF guarantee**: every returned sequence ends with exactly one
//!   [`TokenKind::Eof`] token
//!
//! # Example
//!
//! ```
//! use lox_core::source_analysis::{scan, TokenKind};
//!
//! let (tokens, diagnostics) = scan("1 + 2");
//! assert!(diagnostics.is_empty());
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::Eof]
//! );
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use ecow::EcoString;

use super::{Diagnostic, Literal, Token, TokenKind};

/// A scanner that tokenizes Lox source code.
///
/// The scanner holds the entire source in memory and maintains three
/// cursors: the byte offset where the current token started, the byte
/// offset of the next unread character, and the current 1-based line.
pub struct Scanner<'src> {
    /// The source text being scanned.
    source: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Byte offset of the next unread character.
    position: usize,
    /// Byte offset where the current token started.
    token_start: usize,
    /// Current 1-based source line.
    line: u32,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Diagnostics recorded so far.
    diagnostics: Vec<Diagnostic>,
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("line", &self.line)
            .field("remaining", &self.source.get(self.position..).unwrap_or(""))
            .finish()
    }
}

/// Convenience function to scan source into tokens plus any diagnostics.
///
/// The token sequence always ends with an [`TokenKind::Eof`] token, even
/// for empty or entirely malformed input.
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    Scanner::new(source).scan_tokens()
}

impl<'src> Scanner<'src> {
    /// Creates a new scanner for the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            position: 0,
            token_start: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Scans the entire source, consuming the scanner.
    ///
    /// Scanning never fails: whatever tokens could be formed are returned
    /// together with the diagnostics for anything that could not.
    #[must_use]
    pub fn scan_tokens(mut self) -> (Vec<Token>, Vec<Diagnostic>) {
        while self.peek_char().is_some() {
            self.token_start = self.position;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, "", None, self.line));
        (self.tokens, self.diagnostics)
    }

    // ========================================================================
    // Cursor management
    // ========================================================================

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peeks two characters ahead without consuming.
    fn peek_char_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, c)| c)
    }

    /// Consumes the next character and returns it.
    ///
    /// Line tracking is centralised here: every consumed newline bumps the
    /// line counter, so strings and comments that span lines stay accurate.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Consumes the next character only if it matches `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the lexeme of the token currently being scanned.
    fn current_lexeme(&self) -> &'src str {
        &self.source[self.token_start..self.position]
    }

    // ========================================================================
    // Token production
    // ========================================================================

    /// Pushes a token whose lexeme is the current source slice.
    fn add_token(&mut self, kind: TokenKind) {
        self.add_token_with_literal(kind, None);
    }

    /// Pushes a token carrying a literal value.
    fn add_token_with_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.tokens
            .push(Token::new(kind, self.current_lexeme(), literal, self.line));
    }

    /// Scans a single token starting at `token_start`.
    fn scan_token(&mut self) {
        let Some(c) = self.advance() else { return };

        match c {
            // Single-character tokens
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // Division operator or comment
            '/' => {
                if self.match_char('/') {
                    self.advance_while(|c| c != '\n');
                } else if self.match_char('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // One or two character operators
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            // Whitespace is discarded; advance() already counted any newline
            ' ' | '\r' | '\t' | '\n' => {}

            // String literals
            '"' => self.scan_string(),

            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_identifier(),

            _ => {
                self.diagnostics
                    .push(Diagnostic::error(self.line, "Unexpected Character"));
            }
        }
    }

    /// Discards a `/* ... */` block comment.
    ///
    /// Block comments do not nest; the first `*/` closes the comment. If
    /// the source ends first, the rest of the input is silently discarded.
    fn skip_block_comment(&mut self) {
        loop {
            match self.peek_char() {
                None => break,
                Some('*') if self.peek_char_next() == Some('/') => {
                    self.advance(); // *
                    self.advance(); // /
                    break;
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Scans a string literal, tracking embedded newlines.
    ///
    /// The literal value is the source substring with the surrounding
    /// quotes trimmed; Lox strings have no escape sequences. An
    /// unterminated string records a diagnostic at the line where scanning
    /// stopped and emits no token.
    fn scan_string(&mut self) {
        while self.peek_char().is_some_and(|c| c != '"') {
            self.advance();
        }

        if self.peek_char().is_none() {
            self.diagnostics
                .push(Diagnostic::error(self.line, "Unterminated String"));
            return;
        }

        self.advance(); // closing quote

        let value = &self.source[self.token_start + 1..self.position - 1];
        self.add_token_with_literal(
            TokenKind::String,
            Some(Literal::String(EcoString::from(value))),
        );
    }

    /// Scans a number literal: a maximal digit run, optionally followed by
    /// a decimal point and another maximal digit run.
    ///
    /// The decimal point requires a following digit, so `1.` scans as the
    /// number `1` followed by a separate `.` token.
    fn scan_number(&mut self) {
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek_char() == Some('.') && self.peek_char_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.advance(); // consume '.'
            self.advance_while(|c| c.is_ascii_digit());
        }

        let value: f64 = self
            .current_lexeme()
            .parse()
            .expect("digit runs with at most one interior dot parse as f64");
        self.add_token_with_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    /// Scans an identifier or reserved word (maximal munch).
    fn scan_identifier(&mut self) {
        self.advance_while(|c| is_identifier_start(c) || c.is_ascii_digit());

        let kind = keyword_kind(self.current_lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }
}

/// Returns `true` if the character can begin an identifier.
const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Looks up a reserved word, returning its token kind if the text is one.
fn keyword_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "and" => TokenKind::And,
        "class" => TokenKind::Class,
        "else" => TokenKind::Else,
        "false" => TokenKind::False,
        "for" => TokenKind::For,
        "fun" => TokenKind::Fun,
        "if" => TokenKind::If,
        "nil" => TokenKind::Nil,
        "or" => TokenKind::Or,
        "print" => TokenKind::Print,
        "return" => TokenKind::Return,
        "super" => TokenKind::Super,
        "this" => TokenKind::This,
        "true" => TokenKind::True,
        "var" => TokenKind::Var,
        "while" => TokenKind::While,
        _ => return None,
    };
    Some(kind)
}
