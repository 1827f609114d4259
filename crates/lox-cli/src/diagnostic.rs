// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts lox-core diagnostics into miette-formatted errors with source
//! context and an arrow under the offending line. Core diagnostics are
//! line-addressed, so the label covers the whole reported line.

use lox_core::source_analysis::{Diagnostic as CoreDiagnostic, Severity};
use miette::{Diagnostic, SourceSpan};

/// A front-end diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(lox::parse))]
pub struct ReportedDiagnostic {
    /// Error or warning (stored for potential future use)
    pub severity: Severity,
    /// Human-readable error message, including the `at '..'` context
    pub message: String,
    /// Source code for context
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// The offending source line
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label for the error span (interpolated by miette derive macro)
    pub label: String,
}

impl ReportedDiagnostic {
    /// Create a new diagnostic from a lox-core diagnostic.
    pub fn from_core_diagnostic(
        diagnostic: &CoreDiagnostic,
        source_path: &str,
        source: &str,
    ) -> Self {
        let label = match diagnostic.severity {
            Severity::Error => "error on this line",
            Severity::Warning => "warning on this line",
        };

        let message = if diagnostic.context.is_empty() {
            diagnostic.message.to_string()
        } else {
            format!("{} {}", diagnostic.message, diagnostic.context)
        };

        Self {
            severity: diagnostic.severity,
            message,
            src: miette::NamedSource::new(source_path, source.to_string()),
            span: line_span(source, diagnostic.line),
            label: label.to_string(),
        }
    }
}

/// Returns the byte span of a 1-based line within `source`, excluding the
/// trailing newline. Out-of-range lines collapse to an empty span at the
/// end of the source.
fn line_span(source: &str, line: u32) -> SourceSpan {
    let mut offset = 0;
    let mut current = 1;
    for candidate in source.split_inclusive('\n') {
        if current == line {
            let len = candidate.trim_end_matches(['\n', '\r']).len();
            return (offset, len).into();
        }
        offset += candidate.len();
        current += 1;
    }
    (source.len(), 0).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_span_first_line() {
        let span = line_span("1 + 2\n3 + 4\n", 1);
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn line_span_second_line() {
        let span = line_span("1 + 2\n3 + 4\n", 2);
        assert_eq!(span.offset(), 6);
        assert_eq!(span.len(), 5);
    }

    #[test]
    fn line_span_out_of_range_is_empty_at_end() {
        let span = line_span("1 + 2", 9);
        assert_eq!(span.offset(), 5);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn from_core_diagnostic_includes_context() {
        let core = CoreDiagnostic::error(1, "Expect expression.").with_context("at ')'");
        let reported = ReportedDiagnostic::from_core_diagnostic(&core, "demo.lox", ")");

        assert_eq!(reported.severity, Severity::Error);
        assert_eq!(reported.message, "Expect expression. at ')'");
        assert_eq!(reported.span.offset(), 0);
        assert_eq!(reported.span.len(), 1);
        assert_eq!(reported.label, "error on this line");
    }

    #[test]
    fn from_core_diagnostic_without_context() {
        let core = CoreDiagnostic::error(1, "Unterminated String");
        let reported = ReportedDiagnostic::from_core_diagnostic(&core, "demo.lox", "\"abc");

        assert_eq!(reported.message, "Unterminated String");
        assert_eq!(reported.span.len(), 4);
    }
}
