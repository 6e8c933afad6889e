//! Utility macros for the interpreter.
//!
//! - `MK_TOKEN!` - Creates a Token instance

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The source text the token was scanned from
/// * `$literal` - The literal value, if any
/// * `$line` - The 1-based source line
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Some(Value::Number(42.0)), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $literal:expr, $line:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            literal: $literal,
            line: $line,
        }
    };
}
