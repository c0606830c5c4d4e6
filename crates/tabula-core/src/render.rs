//! Fully-parenthesised rendering.
//!
//! Unary operations render as `(op operand)` and binary operations as
//! `(left op right)`, with no whitespace inserted. This is the textual form
//! handed to tabulators under test.

use crate::expr::Expr;

/// Renders an expression with every operation wrapped in parentheses.
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.fold(
        |value| value.to_string(),
        str::to_string,
        |op, arg| {
            let mut out = String::with_capacity(op.len() + arg.len() + 2);
            out.push('(');
            out.push_str(op);
            out.push_str(&arg);
            out.push(')');
            out
        },
        |op, left, right| {
            let mut out = String::with_capacity(left.len() + op.len() + right.len() + 2);
            out.push('(');
            out.push_str(&left);
            out.push_str(op);
            out.push_str(&right);
            out.push(')');
            out
        },
    )
}
