use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    value::value::Value,
};

use super::parser::Parser;

type RuleHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parse_equality(parser)
}

pub fn parse_equality(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::EqualEqual, TokenKind::BangEqual], parse_comparison)
}

pub fn parse_comparison(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(
        parser,
        &[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ],
        parse_term,
    )
}

pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Minus, TokenKind::Plus], parse_factor)
}

pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    parse_binary_expr(parser, &[TokenKind::Slash, TokenKind::Star], parse_unary)
}

// One precedence level: operands come from the next tighter level and
// successive operators fold into the left accumulator.
fn parse_binary_expr(
    parser: &mut Parser,
    operators: &[TokenKind],
    operand: RuleHandler,
) -> Result<Expr, Error> {
    let mut left = operand(parser)?;
    let mut depth = left.depth();

    // A left fold grows one level per operator.
    while let Some(operator) = parser.match_kinds(operators) {
        let right = operand(parser)?;
        depth = depth.max(right.depth()) + 1;
        parser.check_depth(depth, &operator)?;
        left = Expr::binary(left, operator, right);
    }

    Ok(left)
}

pub fn parse_unary(parser: &mut Parser) -> Result<Expr, Error> {
    if let Some(operator) = parser.match_kinds(&[TokenKind::Minus, TokenKind::Bang]) {
        parser.enter_nested()?;
        let right = parse_unary(parser)?;
        parser.exit_nested();

        parser.check_depth(right.depth() + 1, &operator)?;
        return Ok(Expr::unary(operator, right));
    }

    parse_primary(parser)
}

pub fn parse_primary(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::True => {
            parser.advance();
            Ok(Expr::literal(Value::Boolean(true)))
        }
        TokenKind::False => {
            parser.advance();
            Ok(Expr::literal(Value::Boolean(false)))
        }
        TokenKind::Nil => {
            parser.advance();
            Ok(Expr::literal(Value::Nil))
        }
        TokenKind::Number | TokenKind::String => {
            let token = parser.advance();
            match &token.literal {
                Some(value) => Ok(Expr::literal(value.clone())),
                None => Err(Error::at_token(
                    ErrorImpl::ExpectedExpression {
                        found: token.lexeme.clone(),
                    },
                    token,
                )),
            }
        }
        TokenKind::LeftParen => parse_grouping_expr(parser),
        _ => {
            let token = parser.current_token();
            Err(Error::at_token(
                ErrorImpl::ExpectedExpression {
                    found: token.describe().to_string(),
                },
                token,
            ))
        }
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let paren = parser.advance().clone();
    parser.enter_nested()?;
    let expr = parse_expr(parser)?;
    parser.exit_nested();

    let token = parser.current_token();
    let error = Error::at_token(
        ErrorImpl::UnterminatedExpression {
            found: token.describe().to_string(),
        },
        token,
    );
    parser.expect_error(TokenKind::RightParen, error)?;

    parser.check_depth(expr.depth() + 1, &paren)?;
    Ok(Expr::grouping(expr))
}
