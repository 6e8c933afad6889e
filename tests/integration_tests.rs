//! Integration tests for the end-to-end pipeline.
//!
//! These tests drive source text through scanning, parsing and evaluation
//! using only the public API.

use lox::{
    ast::{ast::Expr, printer::AstPrinter},
    errors::{diagnostics::Diagnostics, errors::ErrorImpl},
    interpreter::interpreter::Interpreter,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    run,
    value::value::Value,
};
use pretty_assertions::assert_eq;

#[test]
fn test_scan_simple_sum() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("1+2", &mut diagnostics);

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number, TokenKind::EOF]);
    assert_eq!(tokens[0].literal, Some(Value::Number(1.0)));
    assert_eq!(tokens[2].literal, Some(Value::Number(2.0)));
}

#[test]
fn test_evaluate_grouped_product() {
    assert_eq!(run("(1+2)*3"), Ok(Value::Number(9.0)));
}

#[test]
fn test_evaluate_concatenation() {
    assert_eq!(run("\"a\"+\"b\""), Ok(Value::String("ab".to_string())));
}

#[test]
fn test_evaluate_comparisons() {
    assert_eq!(run("1 < 2"), Ok(Value::Boolean(true)));
    assert_eq!(run("2 <= 1"), Ok(Value::Boolean(false)));
}

#[test]
fn test_negating_bool_reports_operator_line() {
    let diagnostics = run("1 +\n-true").unwrap_err();

    assert_eq!(diagnostics.len(), 1);
    let error = &diagnostics.errors()[0];
    assert_eq!(error.get_error_name(), "OperandNotANumber");
    assert_eq!(error.get_line(), 2);
    assert_eq!(error.to_string(), "[line 2] ERROR: Operand must be a number.");
}

#[test]
fn test_unterminated_string_does_not_crash() {
    let mut diagnostics = Diagnostics::new();
    let tokens = tokenize("\"abc", &mut diagnostics);

    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EOF));
    assert_eq!(diagnostics.errors()[0].get_kind(), &ErrorImpl::UnterminatedString);
    assert_eq!(diagnostics.errors()[0].to_string(), "[line 1] ERROR: Unterminated string.");
}

#[test]
fn test_nested_groupings() {
    let mut diagnostics = Diagnostics::new();
    let expr = parse(tokenize("(((1)))", &mut diagnostics), &mut diagnostics).unwrap();

    let mut depth = 0;
    let mut current = &expr;
    while let Expr::Grouping(grouping) = current {
        depth += 1;
        current = grouping.expression.as_ref();
    }
    assert_eq!(depth, 3);
    assert_eq!(current, &Expr::literal(Value::Number(1.0)));
    assert_eq!(Interpreter::new().evaluate(&expr), Ok(Value::Number(1.0)));
}

#[test]
fn test_nil_equality() {
    assert_eq!(run("nil == nil"), Ok(Value::Boolean(true)));
    assert_eq!(run("nil == 1"), Ok(Value::Boolean(false)));
}

#[test]
fn test_equality_across_number_and_string_fails() {
    let diagnostics = run("1 == \"a\"").unwrap_err();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics.errors()[0].get_kind(),
        &ErrorImpl::OperandNotANumber {
            operator: "==".to_string(),
            received: "string".to_string(),
        }
    );
}

#[test]
fn test_deep_nesting_is_reported_not_fatal() {
    let diagnostics = run(&format!("{}1", "-".repeat(200_000))).unwrap_err();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.errors()[0].to_string(), "[line 1] ERROR: Expression nests too deeply.");
}

#[test]
fn test_syntax_error_yields_no_value() {
    let diagnostics = run("(1 + 2").unwrap_err();

    assert_eq!(diagnostics.errors()[0].to_string(), "[line 1] ERROR: Expect ')' after expression.");
}

#[test]
fn test_multiline_source_diagnostics_render() {
    let source = "// sums\n1 +\n  (2 * \"x\")";
    let diagnostics = run(source).unwrap_err();

    assert_eq!(
        diagnostics.render(source),
        "[line 3] ERROR: Operand must be a number.\n  |\n3 | (2 * \"x\")\n  = Operator `*` expected a number, received `string`\n"
    );
}

#[test]
fn test_independent_runs_share_nothing() {
    assert!(run("1 + nil").is_err());
    assert_eq!(run("1 + 1"), Ok(Value::Number(2.0)));
}

#[test]
fn test_ast_printer_over_parsed_tree() {
    let mut diagnostics = Diagnostics::new();
    let expr = parse(tokenize("-1 + 2 * (3 - 4) == !false", &mut diagnostics), &mut diagnostics).unwrap();

    assert_eq!(
        AstPrinter::new().print(&expr),
        "(== (+ (- 1.0) (* 2.0 (group (- 3.0 4.0)))) (! false))"
    );
}

#[test]
fn test_block_comment_and_multiline_string() {
    assert_eq!(
        run("/* greet\n */ \"hello\n\" + \"world\""),
        Ok(Value::String("hello\nworld".to_string()))
    );
}
