//! Evaluation of parsed trees.

use crate::syntax::{BinOp, Expr};

/// Fold the tree into a number.
///
/// Division by zero follows IEEE 754 and yields an infinity or NaN.
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Operand(n) => *n,
        Expr::Neg(expr) => -evaluate(expr),
        Expr::Binary { op, lhs, rhs } => {
            let (lhs, rhs) = (evaluate(lhs), evaluate(rhs));
            match op {
                BinOp::Add => lhs + rhs,
                BinOp::Sub => lhs - rhs,
                BinOp::Mul => lhs * rhs,
                BinOp::Div => lhs / rhs,
            }
        }
    }
}
