#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::{
    errors::diagnostics::Diagnostics, interpreter::interpreter::Interpreter, lexer::lexer::tokenize,
    parser::parser::parse, value::value::Value,
};

pub mod ast;
pub mod errors;
pub mod interpreter;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod value;

extern crate regex;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lox=debug` or
/// `RUST_LOG=lox=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Scans, parses and evaluates one expression.
///
/// Stops after scanning if any lexical error was reported, after parsing on a
/// syntax error and after evaluation on a runtime error. The returned
/// diagnostics hold every error reported up to that point.
pub fn run(source: &str) -> Result<Value, Diagnostics> {
    let mut diagnostics = Diagnostics::new();

    let tokens = tokenize(source, &mut diagnostics);
    if diagnostics.has_errors() {
        return Err(diagnostics);
    }

    let Some(expr) = parse(tokens, &mut diagnostics) else {
        return Err(diagnostics);
    };

    match Interpreter::new().interpret(&expr, &mut diagnostics) {
        Some(value) => Ok(value),
        None => Err(diagnostics),
    }
}

#[cfg(test)]
mod tests {
    use crate::value::value::Value;

    #[test]
    fn test_run_evaluates_expression() {
        assert_eq!(super::run("(1 + 2) * 3"), Ok(Value::Number(9.0)));
    }

    #[test]
    fn test_run_collects_every_lexical_error() {
        let diagnostics = super::run("1 @ 2 $ \"open").unwrap_err();

        let names: Vec<&str> = diagnostics.iter().map(|error| error.get_error_name()).collect();
        assert_eq!(names, vec!["UnexpectedToken", "UnexpectedToken", "UnterminatedString"]);
    }

    #[test]
    fn test_run_stops_after_lexical_errors() {
        // Parsing would also fail here; only the lexical error is reported.
        let diagnostics = super::run("# +").unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.errors()[0].get_error_name(), "UnexpectedToken");
    }

    #[test]
    fn test_run_reports_runtime_error() {
        let diagnostics = super::run("1 + true").unwrap_err();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.errors()[0].to_string(), "[line 1] ERROR: Operand must be a number.");
    }
}
