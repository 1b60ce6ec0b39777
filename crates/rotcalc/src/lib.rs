//! A line calculator whose parser restores operator precedence by rotating
//! freshly built nodes, one node of lookahead at a time.

pub mod eval;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod util;

pub use crate::{
    eval::evaluate,
    parser::{Parser, SyntaxError},
    syntax::{BinOp, Expr},
};

/// Parse a single line into an expression tree.
pub fn parse_input(input: &str) -> Result<Expr, SyntaxError> {
    let span = tracing::trace_span!("parse");
    let _entered = span.enter();

    Parser::new(input).parse_input()
}

/// Parse and evaluate a single line.
pub fn calculate(input: &str) -> Result<f64, SyntaxError> {
    parse_input(input).map(|expr| evaluate(&expr))
}
