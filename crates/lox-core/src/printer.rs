// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Printers that render an expression tree back to text.
//!
//! Both printers are pure functions of the tree: no shared state, no side
//! effects beyond the returned string. [`TreePrinter`] is the structural
//! oracle used throughout the parser tests — two trees that print
//! identically are structurally equal.

use crate::ast::Expression;

/// Renders a tree in fully parenthesized prefix form.
///
/// Every operator becomes `(operator operand...)`; a grouping renders as
/// `(group inner)`; a literal renders as its natural text form, with the
/// nil sentinel as `nil`.
///
/// # Examples
///
/// ```
/// use lox_core::printer::TreePrinter;
/// use lox_core::source_analysis::{parse, scan};
///
/// let (tokens, _) = scan("-123 * (45.67)");
/// let (expression, _) = parse(tokens);
/// assert_eq!(
///     TreePrinter.print(&expression.unwrap()),
///     "(* (- 123) (group 45.67))"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TreePrinter;

impl TreePrinter {
    /// Renders the tree as a prefix string.
    #[must_use]
    pub fn print(&self, expression: &Expression) -> String {
        match expression {
            Expression::Binary {
                left,
                operator,
                right,
            } => self.parenthesize(operator.lexeme(), &[left, right]),
            Expression::Grouping { expression } => self.parenthesize("group", &[expression]),
            Expression::Literal(value) => value.to_string(),
            Expression::Unary { operator, right } => {
                self.parenthesize(operator.lexeme(), &[right])
            }
        }
    }

    /// Joins `(name operand...)` with the operands rendered recursively.
    fn parenthesize(&self, name: &str, operands: &[&Expression]) -> String {
        let mut result = String::new();
        result.push('(');
        result.push_str(name);
        for operand in operands {
            result.push(' ');
            result.push_str(&self.print(operand));
        }
        result.push(')');
        result
    }
}

/// Renders a tree in postfix form: operands first, operator last, no
/// parentheses.
///
/// A grouping contributes nothing of its own; it renders as its inner
/// operands. Note that postfix output therefore erases grouping, unlike
/// [`TreePrinter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PostfixPrinter;

impl PostfixPrinter {
    /// Renders the tree as a postfix string.
    #[must_use]
    pub fn print(&self, expression: &Expression) -> String {
        match expression {
            Expression::Binary {
                left,
                operator,
                right,
            } => self.postfix(operator.lexeme(), &[left, right]),
            Expression::Grouping { expression } => self.postfix("", &[expression]),
            Expression::Literal(value) => value.to_string(),
            Expression::Unary { operator, right } => self.postfix(operator.lexeme(), &[right]),
        }
    }

    /// Joins the rendered operands, then the trailing operator name.
    fn postfix(&self, name: &str, operands: &[&Expression]) -> String {
        let rendered: Vec<String> = operands
            .iter()
            .map(|operand| self.print(operand))
            .collect();
        let operands = rendered.join(" ");
        if name.is_empty() {
            operands
        } else {
            format!("{operands} {name}")
        }
    }
}
