use crate::{lexer::tokens::Token, value::value::Value};

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// A value known at parse time: number, string, boolean or nil.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub value: Value,
}

// COMPOUND

/// Grouping Expression
/// A parenthesised expression.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingExpr {
    pub expression: Box<Expr>,
}

/// Unary Expression
/// A prefix operator (`-` or `!`) applied to an operand.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Binary Expression
/// An infix operator applied to two operands.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

impl Expr {
    pub fn literal(value: Value) -> Expr {
        Expr::Literal(LiteralExpr { value })
    }

    pub fn grouping(expression: Expr) -> Expr {
        Expr::Grouping(GroupingExpr {
            expression: Box::new(expression),
        })
    }

    pub fn unary(operator: Token, right: Expr) -> Expr {
        Expr::Unary(UnaryExpr {
            operator,
            right: Box::new(right),
        })
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        })
    }
}
