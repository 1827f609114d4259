// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the Lox scanner.
//!
//! These tests use `proptest` to verify scanner invariants over generated
//! inputs:
//!
//! 1. **Scanner never panics** — arbitrary string input always produces tokens
//! 2. **EOF is always last** — every sequence ends with exactly one `Eof`
//! 3. **Scanner is deterministic** — same input, same tokens, same diagnostics
//! 4. **Lines are sane** — token lines are 1-based and non-decreasing
//! 5. **Valid fragments scan cleanly** — known-valid inputs produce no
//!    diagnostics

use proptest::prelude::*;

use super::scanner::scan;
use super::token::TokenKind;

// ============================================================================
// Generators
// ============================================================================

/// Known-valid single-token fragments that should scan without diagnostics.
const VALID_SINGLE_TOKENS: &[&str] = &[
    "42",
    "3.14",
    "\"hello\"",
    "true",
    "false",
    "nil",
    "x",
    "myVariable",
    "_private",
    "classy",
    "+",
    "-",
    "*",
    "/",
    "(",
    ")",
    "{",
    "}",
    "!",
    "!=",
    "==",
    "<=",
    ">=",
    ";",
    ",",
    ".",
];

/// Multi-token valid expressions that should scan cleanly.
const VALID_EXPRESSIONS: &[&str] = &[
    "1 + 2 * 3",
    "(1 + 2) * 3",
    "!!true",
    "1 - 2 - 3",
    "\"a\" == \"b\"",
    "1 /* comment */ + 3",
    "1 // trailing comment",
    "-4.5 / (2 >= 1)",
    "nil != false",
];

fn valid_single_token() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_SINGLE_TOKENS).prop_map(std::string::ToString::to_string)
}

fn valid_expression() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_EXPRESSIONS).prop_map(std::string::ToString::to_string)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Property 1: Scanner never panics on arbitrary string input.
    #[test]
    fn scanner_never_panics(input in "\\PC{0,500}") {
        let _ = scan(&input);
    }

    /// Property 2: The token sequence always ends with exactly one EOF.
    #[test]
    fn scan_always_terminates_with_eof(input in "\\PC{0,500}") {
        let (tokens, _) = scan(&input);
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().unwrap().kind(), TokenKind::Eof);
        let eof_count = tokens.iter().filter(|t| t.kind().is_eof()).count();
        prop_assert_eq!(eof_count, 1);
    }

    /// Property 3: Scanning is deterministic.
    #[test]
    fn scanner_is_deterministic(input in "\\PC{0,300}") {
        let (first_tokens, first_diagnostics) = scan(&input);
        let (second_tokens, second_diagnostics) = scan(&input);
        prop_assert_eq!(first_tokens, second_tokens);
        prop_assert_eq!(first_diagnostics, second_diagnostics);
    }

    /// Property 4: Token lines are 1-based and non-decreasing.
    #[test]
    fn token_lines_are_monotonic(input in "\\PC{0,300}") {
        let (tokens, _) = scan(&input);
        let mut previous_line = 1;
        for token in &tokens {
            prop_assert!(token.line() >= 1);
            prop_assert!(token.line() >= previous_line);
            previous_line = token.line();
        }
    }

    /// Property 5a: Known-valid single tokens scan without diagnostics.
    #[test]
    fn valid_single_tokens_scan_cleanly(input in valid_single_token()) {
        let (tokens, diagnostics) = scan(&input);
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(tokens.len(), 2); // the token itself plus EOF
    }

    /// Property 5b: Known-valid expressions scan without diagnostics.
    #[test]
    fn valid_expressions_scan_cleanly(input in valid_expression()) {
        let (_, diagnostics) = scan(&input);
        prop_assert!(diagnostics.is_empty());
    }

    /// Whitespace between tokens never changes the scanned kinds.
    #[test]
    fn extra_whitespace_is_insignificant(input in valid_expression(), padding in "[ \t]{0,4}") {
        let padded: String = input
            .split(' ')
            .collect::<Vec<_>>()
            .join(&format!(" {padding}"));
        let kinds = |source: &str| {
            scan(source).0.into_iter().map(|t| t.kind()).collect::<Vec<_>>()
        };
        prop_assert_eq!(kinds(&input), kinds(&padded));
    }
}
