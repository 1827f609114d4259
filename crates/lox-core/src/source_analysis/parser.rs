// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser for Lox expressions.
//!
//! The grammar is strictly layered by precedence, lowest binding power
//! first, with one function per rule:
//!
//! ```text
//! expression  -> equality
//! equality    -> comparison ( ("!=" | "==") comparison )*
//! comparison  -> term ( (">" | ">=" | "<" | "<=") term )*
//! term        -> factor ( ("-" | "+") factor )*
//! factor      -> unary ( ("/" | "*") unary )*
//! unary       -> ("!" | "-") unary | primary
//! primary     -> NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
//! ```
//!
//! Every binary level is left-associative (`a - b - c` parses as
//! `(a - b) - c`); `unary` is right-recursive, so `!!x` is `!(!x)`.
//!
//! # Error Handling
//!
//! Each grammar-level function returns `Result<Expression, SyntaxError>`.
//! [`SyntaxError`] carries no payload: the diagnostic has already been
//! recorded by the time it is raised, and the signal only propagates
//! "no tree" up to [`parse`]. Failures travel through ordinary `?` returns,
//! never stack unwinding, so the recovery point is an explicit state
//! transition. An internal invariant violation is a defect and panics; it
//! must never ride the [`SyntaxError`] channel.
//!
//! # Usage
//!
//! ```
//! use lox_core::printer::TreePrinter;
//! use lox_core::source_analysis::{parse, scan};
//!
//! let (tokens, _) = scan("1 + 2 * 3");
//! let (expression, diagnostics) = parse(tokens);
//!
//! assert!(diagnostics.is_empty());
//! let tree = expression.expect("valid expression");
//! assert_eq!(TreePrinter.print(&tree), "(+ 1 (* 2 3))");
//! ```

use thiserror::Error;

use crate::ast::{Expression, LiteralValue};

use super::{Diagnostic, Literal, Token, TokenKind};

/// Internal signal that a syntax diagnostic has already been recorded.
///
/// Deliberately payload-free: everything worth reporting went into the
/// parser's diagnostics before this was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("syntax error")]
pub(super) struct SyntaxError;

/// Parses a token sequence into a single expression.
///
/// On failure the returned expression is `None` and at least one error
/// diagnostic explains why. One parse call yields at most one expression;
/// trailing tokens after a complete expression are left unconsumed (the
/// statement layer that would demand more is not built yet).
///
/// # Panics
///
/// Panics if `tokens` does not end with an [`TokenKind::Eof`] token. The
/// scanner guarantees that terminator; handing the parser a truncated
/// sequence is a programming defect, not a syntax error.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Option<Expression>, Vec<Diagnostic>) {
    assert!(
        tokens.last().is_some_and(|t| t.kind().is_eof()),
        "token sequence must end with Eof"
    );

    let mut parser = Parser::new(tokens);
    match parser.expression() {
        Ok(expression) => (Some(expression), parser.diagnostics),
        Err(SyntaxError) => {
            // Skip to the next statement boundary so the future statement
            // loop resumes from a known-good position.
            parser.synchronize();
            (None, parser.diagnostics)
        }
    }
}

/// The parser state.
struct Parser {
    /// The tokens being parsed.
    tokens: Vec<Token>,
    /// Index of the next token to consume.
    current: usize,
    /// Accumulated diagnostics.
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    // ========================================================================
    // Grammar rules
    // ========================================================================

    /// `expression -> equality`
    fn expression(&mut self) -> Result<Expression, SyntaxError> {
        self.equality()
    }

    /// `equality -> comparison ( ("!=" | "==") comparison )*`
    fn equality(&mut self) -> Result<Expression, SyntaxError> {
        let mut expression = self.comparison()?;

        while self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    /// `comparison -> term ( (">" | ">=" | "<" | "<=") term )*`
    fn comparison(&mut self) -> Result<Expression, SyntaxError> {
        let mut expression = self.term()?;

        while self.match_kinds(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    /// `term -> factor ( ("-" | "+") factor )*`
    fn term(&mut self) -> Result<Expression, SyntaxError> {
        let mut expression = self.factor()?;

        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    /// `factor -> unary ( ("/" | "*") unary )*`
    fn factor(&mut self) -> Result<Expression, SyntaxError> {
        let mut expression = self.unary()?;

        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expression = Expression::binary(expression, operator, right);
        }

        Ok(expression)
    }

    /// `unary -> ("!" | "-") unary | primary`
    fn unary(&mut self) -> Result<Expression, SyntaxError> {
        if self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expression::unary(operator, right));
        }

        self.primary()
    }

    /// `primary -> NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"`
    ///
    /// The only rule that can fail outright: any other leading token
    /// raises `Expect expression.`.
    fn primary(&mut self) -> Result<Expression, SyntaxError> {
        if self.match_kinds(&[TokenKind::False]) {
            return Ok(Expression::Literal(LiteralValue::Boolean(false)));
        }
        if self.match_kinds(&[TokenKind::True]) {
            return Ok(Expression::Literal(LiteralValue::Boolean(true)));
        }
        if self.match_kinds(&[TokenKind::Nil]) {
            return Ok(Expression::Literal(LiteralValue::Nil));
        }

        if self.match_kinds(&[TokenKind::Number, TokenKind::String]) {
            let value = match self.previous().literal() {
                Some(Literal::Number(n)) => LiteralValue::Number(*n),
                Some(Literal::String(s)) => LiteralValue::String(s.clone()),
                None => unreachable!("number and string tokens always carry a literal"),
            };
            return Ok(Expression::Literal(value));
        }

        if self.match_kinds(&[TokenKind::LeftParen]) {
            let expression = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expression::grouping(expression));
        }

        Err(self.error_at_current("Expect expression."))
    }

    // ========================================================================
    // Error handling & recovery
    // ========================================================================

    /// Records an error diagnostic at the current token and returns the
    /// propagation signal.
    fn error_at_current(&mut self, message: &str) -> SyntaxError {
        let token = self.peek();
        let line = token.line();
        let context = if token.kind().is_eof() {
            String::from("at end")
        } else {
            format!("at '{}'", token.lexeme())
        };
        self.diagnostics
            .push(Diagnostic::error(line, message).with_context(context));
        SyntaxError
    }

    /// Discards tokens up to the next statement boundary: just past a `;`,
    /// or right before a keyword that starts a new statement.
    ///
    /// The single-expression grammar has no statements yet, so this only
    /// runs once after a failed top-level parse, but it is the designated
    /// resume point for the eventual statement-sequence loop.
    fn synchronize(&mut self) {
        // Nothing to discard when the failure happened at the terminator;
        // advancing here would ask for a previous token that may not exist.
        if self.is_at_end() {
            return;
        }
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind() == TokenKind::Semicolon {
                return;
            }
            if self.peek().kind().starts_statement() {
                return;
            }
            self.advance();
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// Consumes the current token if its kind is one of `kinds`.
    fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current token to be `kind`, consuming it if so.
    ///
    /// Otherwise records an error diagnostic and returns the propagation
    /// signal.
    fn consume(&mut self, kind: TokenKind, message: &str) -> Result<&Token, SyntaxError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Checks the current token's kind without consuming.
    fn check(&self, kind: TokenKind) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek().kind() == kind
    }

    /// Advances to the next token, returning the one just consumed.
    ///
    /// Never moves past the terminating `Eof`.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Checks if the current token is the end-of-file terminator.
    fn is_at_end(&self) -> bool {
        self.peek().kind().is_eof()
    }

    /// Returns the current (not yet consumed) token.
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the most recently consumed token.
    fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::TreePrinter;
    use crate::source_analysis::scan;

    /// Helper: scan and parse, asserting no diagnostics, and render the
    /// tree in prefix form. Two trees that print identically under
    /// [`TreePrinter`] are structurally equal.
    fn parse_to_tree(source: &str) -> String {
        let (tokens, scan_diagnostics) = scan(source);
        assert!(scan_diagnostics.is_empty(), "lexical errors in {source:?}");
        let (expression, diagnostics) = parse(tokens);
        assert!(diagnostics.is_empty(), "syntax errors in {source:?}: {diagnostics:?}");
        TreePrinter.print(&expression.expect("no tree despite empty diagnostics"))
    }

    /// Helper: scan and parse a source expected to fail, returning the
    /// diagnostics.
    fn parse_failure(source: &str) -> Vec<Diagnostic> {
        let (tokens, _) = scan(source);
        let (expression, diagnostics) = parse(tokens);
        assert!(expression.is_none(), "expected no tree for {source:?}");
        assert!(!diagnostics.is_empty());
        diagnostics
    }

    #[test]
    fn parse_literals() {
        assert_eq!(parse_to_tree("42"), "42");
        assert_eq!(parse_to_tree("\"abc\""), "abc");
        assert_eq!(parse_to_tree("true"), "true");
        assert_eq!(parse_to_tree("false"), "false");
        assert_eq!(parse_to_tree("nil"), "nil");
    }

    #[test]
    fn parse_precedence_factor_over_term() {
        assert_eq!(parse_to_tree("1 + 2 * 3"), "(+ 1 (* 2 3))");
    }

    #[test]
    fn parse_precedence_full_ladder() {
        assert_eq!(
            parse_to_tree("1 == 2 < 3 + 4 * !5"),
            "(== 1 (< 2 (+ 3 (* 4 (! 5)))))"
        );
    }

    #[test]
    fn parse_binary_levels_are_left_associative() {
        assert_eq!(parse_to_tree("1 - 2 - 3"), "(- (- 1 2) 3)");
        assert_eq!(parse_to_tree("1 / 2 / 3"), "(/ (/ 1 2) 3)");
        assert_eq!(parse_to_tree("1 == 2 == 3"), "(== (== 1 2) 3)");
        assert_eq!(parse_to_tree("1 < 2 <= 3"), "(<= (< 1 2) 3)");
    }

    #[test]
    fn parse_grouping_overrides_precedence() {
        assert_eq!(parse_to_tree("(1 + 2) * 3"), "(* (group (+ 1 2)) 3)");
    }

    #[test]
    fn parse_unary_is_right_associative() {
        assert_eq!(parse_to_tree("!!true"), "(! (! true))");
        assert_eq!(parse_to_tree("--1"), "(- (- 1))");
    }

    #[test]
    fn parse_unary_binds_tighter_than_factor() {
        assert_eq!(parse_to_tree("-1 * 2"), "(* (- 1) 2)");
    }

    #[test]
    fn parse_stray_close_paren_expects_expression() {
        let diagnostics = parse_failure(")");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Expect expression.");
        assert_eq!(diagnostics[0].context, "at ')'");
    }

    #[test]
    fn parse_empty_input_reports_at_end() {
        let diagnostics = parse_failure("");
        assert_eq!(diagnostics[0].message, "Expect expression.");
        assert_eq!(diagnostics[0].context, "at end");
    }

    #[test]
    fn parse_token_free_sources_report_at_end() {
        // Whitespace and comments scan to a bare Eof; the parser must
        // report cleanly rather than walk off the token sequence.
        for source in ["", "   \n\t", "// nothing here", "/* gone */"] {
            let diagnostics = parse_failure(source);
            assert_eq!(diagnostics.len(), 1, "for {source:?}");
            assert_eq!(diagnostics[0].message, "Expect expression.");
            assert_eq!(diagnostics[0].context, "at end");
        }
    }

    #[test]
    fn parse_unclosed_grouping_expects_close_paren() {
        let diagnostics = parse_failure("(1 + 2");
        assert_eq!(diagnostics[0].message, "Expect ')' after expression.");
        assert_eq!(diagnostics[0].context, "at end");
    }

    #[test]
    fn parse_grouping_error_points_at_first_non_paren_token() {
        let diagnostics = parse_failure("(1 2");
        assert_eq!(diagnostics[0].message, "Expect ')' after expression.");
        assert_eq!(diagnostics[0].context, "at '2'");
    }

    #[test]
    fn parse_dangling_operator_fails() {
        let diagnostics = parse_failure("1 +");
        assert_eq!(diagnostics[0].message, "Expect expression.");
        assert_eq!(diagnostics[0].context, "at end");
    }

    #[test]
    fn parse_trailing_tokens_are_ignored() {
        // One call, one expression; the statement layer is not built yet.
        assert_eq!(parse_to_tree("1 2"), "1");
    }

    #[test]
    fn error_diagnostics_carry_the_token_line() {
        let diagnostics = parse_failure("(1 +\n)");
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(diagnostics[0].context, "at ')'");
    }

    #[test]
    fn synchronize_stops_after_semicolon() {
        let (tokens, _) = scan("+ 1 2; 3");
        let mut parser = Parser::new(tokens);
        assert!(parser.expression().is_err());
        parser.synchronize();
        assert_eq!(parser.peek().lexeme(), "3");
    }

    #[test]
    fn synchronize_stops_before_statement_keyword() {
        let (tokens, _) = scan("+ 1 2 var x");
        let mut parser = Parser::new(tokens);
        assert!(parser.expression().is_err());
        parser.synchronize();
        assert_eq!(parser.peek().kind(), TokenKind::Var);
    }

    #[test]
    fn synchronize_is_a_no_op_on_a_bare_terminator() {
        let (tokens, _) = scan("");
        let mut parser = Parser::new(tokens);
        assert!(parser.expression().is_err());
        parser.synchronize();
        assert!(parser.is_at_end());
    }

    #[test]
    fn synchronize_runs_out_at_eof() {
        let (tokens, _) = scan("+ 1 2");
        let mut parser = Parser::new(tokens);
        assert!(parser.expression().is_err());
        parser.synchronize();
        assert!(parser.is_at_end());
    }

    #[test]
    #[should_panic(expected = "token sequence must end with Eof")]
    fn parse_rejects_truncated_token_sequence() {
        let _ = parse(vec![Token::new(TokenKind::Number, "1", Some(Literal::Number(1.0)), 1)]);
    }
}
