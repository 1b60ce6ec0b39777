//! Parser.
//!
//! The parser reads a line left to right and never keeps more than one
//! completed node aside (the *pending* node). Precedence is restored by
//! rotating each new binary node against the pending one as soon as it is
//! built, rather than by climbing or a shunting-yard stack.

use crate::{
    lexer::{Lexer, Token},
    syntax::{BinOp, Expr},
};
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SyntaxError {
    #[error("operands must be numbers (found {found} at offset {})", .span.start)]
    OperandExpected { found: Token, span: Range<usize> },

    #[error("expressions must have operators (found {found} at offset {})", .span.start)]
    OperatorExpected { found: Token, span: Range<usize> },
}

impl SyntaxError {
    /// The byte range of the offending token.
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::OperandExpected { span, .. } | Self::OperatorExpected { span, .. } => {
                span.clone()
            }
        }
    }
}

/// A single-line expression parser.
#[derive(Debug)]
pub struct Parser<'source> {
    lexer: Lexer<'source>,
    pending: Option<Expr>,
}

impl<'source> Parser<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            lexer: Lexer::new(input),
            pending: None,
        }
    }

    /// Parse the whole line into a single tree.
    pub fn parse_input(mut self) -> Result<Expr, SyntaxError> {
        let operand = self.parse_operand()?;
        if self.lexer.at_end() {
            tracing::trace!("single operand: {}", operand);
            return Ok(operand);
        }
        self.pending = Some(operand);
        self.parse_expression()
    }

    fn next_token(&mut self) -> Token {
        let token = self.lexer.next_token();
        tracing::trace!("read token {:?} at {:?}", token, self.lexer.span());
        token
    }

    /// operand := [`+' | `-'] NUMBER
    fn parse_operand(&mut self) -> Result<Expr, SyntaxError> {
        let mut token = self.next_token();
        let sign = match token {
            Token::Plus | Token::Minus => {
                let sign = token;
                token = self.next_token();
                Some(sign)
            }
            _ => None,
        };

        let value = match token {
            Token::Number(value) => value,
            found => {
                return Err(SyntaxError::OperandExpected {
                    found,
                    span: self.lexer.span(),
                })
            }
        };

        match sign {
            Some(Token::Minus) => Ok(Expr::neg(Expr::Operand(value))),
            _ => Ok(Expr::Operand(value)),
        }
    }

    /// Consume `op operand` pairs until the end of input, folding each new
    /// binary node into the pending one.
    fn parse_expression(&mut self) -> Result<Expr, SyntaxError> {
        loop {
            let (lhs, retained) = match self.pending.take() {
                Some(pending) => (pending, true),
                None => (self.parse_operand()?, false),
            };

            let op = match self.next_token() {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                found => {
                    return Err(SyntaxError::OperatorExpected {
                        found,
                        span: self.lexer.span(),
                    })
                }
            };

            let rhs = self.parse_operand()?;

            let candidate = if retained {
                rotate(lhs, op, rhs)
            } else {
                Expr::binary(op, lhs, rhs)
            };
            tracing::trace!("built node: {}", candidate);

            if self.lexer.at_end() {
                return Ok(candidate);
            }
            self.pending = Some(candidate);
        }
    }
}

/// Build `pending op rhs`, re-parenting when `op` binds tighter than the
/// operator at the root of `pending`.
///
/// `(a prev b) op c` becomes `a prev (b op c)`. Only the root of `pending` is
/// inspected.
fn rotate(pending: Expr, op: BinOp, rhs: Expr) -> Expr {
    match pending {
        Expr::Binary {
            op: prev,
            lhs: first,
            rhs: mid,
        } if prev.precedence() < op.precedence() => {
            tracing::trace!("rotate: `{}' binds tighter than `{}'", op, prev);
            Expr::Binary {
                op: prev,
                lhs: first,
                rhs: Box::new(Expr::Binary {
                    op,
                    lhs: mid,
                    rhs: Box::new(rhs),
                }),
            }
        }
        pending => Expr::binary(op, pending, rhs),
    }
}
