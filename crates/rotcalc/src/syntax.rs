//! Syntax definition.

use std::fmt;

/// Binary operators, in two precedence tiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The precedence tier: 1 for `+`/`-`, 2 for `*`/`/`.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Operand(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn neg(expr: Expr) -> Self {
        Self::Neg(Box::new(expr))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand(n) => write!(f, "{}", n),
            Self::Neg(expr) => write!(f, "(neg {})", expr),
            Self::Binary { op, lhs, rhs } => write!(f, "({} {} {})", op, lhs, rhs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_tiers() {
        assert!(BinOp::Add.precedence() < BinOp::Mul.precedence());
        assert!(BinOp::Sub.precedence() < BinOp::Div.precedence());
        assert_eq!(BinOp::Add.precedence(), BinOp::Sub.precedence());
        assert_eq!(BinOp::Mul.precedence(), BinOp::Div.precedence());
    }

    #[test]
    fn display_sexpr() {
        let expr = Expr::binary(
            BinOp::Sub,
            Expr::neg(Expr::Operand(1.5)),
            Expr::binary(BinOp::Div, Expr::Operand(4.0), Expr::Operand(2.0)),
        );
        assert_eq!(expr.to_string(), "(- (neg 1.5) (/ 4 2))");
    }
}
