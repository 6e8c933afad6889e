use crate::{
    ast::{
        ast::{Expr, ExprVisitor},
        expressions::{BinaryExpr, GroupingExpr, LiteralExpr, UnaryExpr},
    },
    errors::{
        diagnostics::Diagnostics,
        errors::{Error, ErrorImpl},
    },
    lexer::tokens::{Token, TokenKind},
    value::value::Value,
};

#[derive(Debug, Default)]
pub struct Interpreter;

impl Interpreter {
    pub fn new() -> Self {
        Interpreter
    }

    /// Evaluates `expr` to a value, or fails on the first runtime error.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, Error> {
        expr.accept(self)
    }

    /// Evaluates `expr`, reporting a runtime error to `diagnostics` instead
    /// of returning it.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = ?expr.get_expr_type()))]
    pub fn interpret(&mut self, expr: &Expr, diagnostics: &mut Diagnostics) -> Option<Value> {
        match self.evaluate(expr) {
            Ok(value) => {
                tracing::debug!(%value, "evaluated");
                Some(value)
            }
            Err(error) => {
                diagnostics.report(error);
                None
            }
        }
    }
}

impl ExprVisitor<Result<Value, Error>> for Interpreter {
    fn visit_binary_expr(&mut self, expr: &BinaryExpr) -> Result<Value, Error> {
        let left = self.evaluate(&expr.left)?;
        let right = self.evaluate(&expr.right)?;
        let operator = &expr.operator;

        match operator.kind {
            TokenKind::Minus => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Number(left - right))
            }
            TokenKind::Star => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Number(left * right))
            }
            TokenKind::Slash => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Number(left / right))
            }
            TokenKind::Greater => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Boolean(left > right))
            }
            TokenKind::GreaterEqual => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Boolean(left >= right))
            }
            TokenKind::Less => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Boolean(left < right))
            }
            TokenKind::LessEqual => {
                let (left, right) = number_operands(operator, &left, &right)?;
                Ok(Value::Boolean(left <= right))
            }
            TokenKind::Plus => add_operands(operator, &left, &right),
            TokenKind::EqualEqual => Ok(Value::Boolean(equal_operands(operator, &left, &right)?)),
            TokenKind::BangEqual => Ok(Value::Boolean(!equal_operands(operator, &left, &right)?)),
            _ => Err(unsupported_operator(operator)),
        }
    }

    fn visit_grouping_expr(&mut self, expr: &GroupingExpr) -> Result<Value, Error> {
        self.evaluate(&expr.expression)
    }

    fn visit_literal_expr(&mut self, expr: &LiteralExpr) -> Result<Value, Error> {
        Ok(expr.value.clone())
    }

    fn visit_unary_expr(&mut self, expr: &UnaryExpr) -> Result<Value, Error> {
        let right = self.evaluate(&expr.right)?;
        let operator = &expr.operator;

        match operator.kind {
            TokenKind::Minus => {
                let number = right.as_number().ok_or_else(|| not_a_number(operator, &right))?;
                Ok(Value::Number(-number))
            }
            // Only booleans can be negated; nil and other kinds have no truthiness.
            TokenKind::Bang => {
                let boolean = right.as_bool().ok_or_else(|| {
                    Error::at_token(
                        ErrorImpl::OperandNotABool {
                            operator: operator.lexeme.clone(),
                            received: right.type_name().to_string(),
                        },
                        operator,
                    )
                })?;
                Ok(Value::Boolean(!boolean))
            }
            _ => Err(unsupported_operator(operator)),
        }
    }
}

fn number_operands(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64), Error> {
    match (left, right) {
        (Value::Number(left), Value::Number(right)) => Ok((*left, *right)),
        (Value::Number(_), other) | (other, _) => Err(not_a_number(operator, other)),
    }
}

// Numbers add, strings concatenate.
fn add_operands(operator: &Token, left: &Value, right: &Value) -> Result<Value, Error> {
    if let (Some(left), Some(right)) = (left.as_number(), right.as_number()) {
        return Ok(Value::Number(left + right));
    }

    if let (Some(left), Some(right)) = (left.as_string(), right.as_string()) {
        return Ok(Value::String(format!("{}{}", left, right)));
    }

    Err(not_a_number(operator, first_non_number(left, right)))
}

/// Decides `==` for a pair of operands.
///
/// Numbers compare with numbers, strings with strings and booleans with
/// booleans. Nil compares with anything and only equals nil. Any other pair
/// is a type error.
fn equal_operands(operator: &Token, left: &Value, right: &Value) -> Result<bool, Error> {
    match (left, right) {
        (Value::Number(_), Value::Number(_))
        | (Value::String(_), Value::String(_))
        | (Value::Boolean(_), Value::Boolean(_))
        | (Value::Nil, _)
        | (_, Value::Nil) => Ok(left.is_equal(right)),
        _ => Err(not_a_number(operator, first_non_number(left, right))),
    }
}

fn first_non_number<'a>(left: &'a Value, right: &'a Value) -> &'a Value {
    if left.as_number().is_none() {
        left
    } else {
        right
    }
}

fn not_a_number(operator: &Token, received: &Value) -> Error {
    Error::at_token(
        ErrorImpl::OperandNotANumber {
            operator: operator.lexeme.clone(),
            received: received.type_name().to_string(),
        },
        operator,
    )
}

fn unsupported_operator(operator: &Token) -> Error {
    Error::at_token(
        ErrorImpl::UnsupportedOperator {
            operator: operator.describe().to_string(),
        },
        operator,
    )
}
