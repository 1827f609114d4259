// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostics for the Lox front end.
//!
//! The scanner and parser never unwind past their own entry points for
//! expected lexical or syntactic problems. Instead each pass accumulates
//! [`Diagnostic`] values and returns them to the caller, so concurrent
//! parses never share reporting state. A panic remains reserved for
//! internal defects (it is not an error-reporting channel).

use ecow::EcoString;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An error that prevents the source from being used.
    Error,
    /// A warning that should be addressed.
    Warning,
}

/// A line-addressed diagnostic message.
///
/// The `context` field narrows the location within the line, e.g.
/// `at ')'` or `at end`; scanner diagnostics leave it empty.
///
/// # Examples
///
/// ```
/// use lox_core::source_analysis::Diagnostic;
///
/// let diagnostic = Diagnostic::error(2, "Expect expression.").with_context("at ')'");
/// assert_eq!(diagnostic.to_string(), "[line 2] Error at ')': Expect expression.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: Severity,
    /// The 1-based source line the diagnostic points at.
    pub line: u32,
    /// Where within the line the problem was detected (may be empty).
    pub context: EcoString,
    /// The diagnostic message.
    pub message: EcoString,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    #[must_use]
    pub fn error(line: u32, message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Error,
            line,
            context: EcoString::new(),
            message: message.into(),
        }
    }

    /// Creates a new warning diagnostic.
    #[must_use]
    pub fn warning(line: u32, message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Warning,
            line,
            context: EcoString::new(),
            message: message.into(),
        }
    }

    /// Attaches a location context such as `at ')'` or `at end`.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<EcoString>) -> Self {
        self.context = context.into();
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "[line {}] {label}", self.line)?;
        if !self.context.is_empty() {
            write!(f, " {}", self.context)?;
        }
        write!(f, ": {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display_without_context() {
        let diagnostic = Diagnostic::error(1, "Unexpected Character");
        assert_eq!(
            diagnostic.to_string(),
            "[line 1] Error: Unexpected Character"
        );
    }

    #[test]
    fn diagnostic_display_with_context() {
        let diagnostic = Diagnostic::error(3, "Expect expression.").with_context("at end");
        assert_eq!(
            diagnostic.to_string(),
            "[line 3] Error at end: Expect expression."
        );
    }

    #[test]
    fn warning_display() {
        let diagnostic = Diagnostic::warning(7, "unused token");
        assert_eq!(diagnostic.to_string(), "[line 7] Warning: unused token");
        assert_eq!(diagnostic.severity, Severity::Warning);
    }
}
