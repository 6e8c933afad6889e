//! Prefix-notation rendering of expression trees.
//!
//! `(1 + 2) * 3` renders as `(* (group (+ 1.0 2.0)) 3.0)`.

use crate::value::value::Value;

use super::{
    ast::{Expr, ExprVisitor},
    expressions::{BinaryExpr, GroupingExpr, LiteralExpr, UnaryExpr},
};

#[derive(Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut result = format!("({}", name);
        for expr in exprs {
            result.push(' ');
            result.push_str(&expr.accept(self));
        }
        result.push(')');
        result
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.left, &*expr.right])
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> String {
        self.parenthesize("group", &[&*expr.expression])
    }

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> String {
        match &expr.value {
            Value::String(string) => format!("{:?}", string),
            value => value.to_string(),
        }
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> String {
        self.parenthesize(&expr.operator.lexeme, &[&*expr.right])
    }
}
