//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a single expression tree. Each precedence level is
//! one function, and every binary level folds to the left:
//!
//! ```text
//! expression  := equality
//! equality    := comparison (("==" | "!=") comparison)*
//! comparison  := term ((">" | ">=" | "<" | "<=") term)*
//! term        := factor (("-" | "+") factor)*
//! factor      := unary (("/" | "*") unary)*
//! unary       := ("-" | "!") unary | primary
//! primary     := "true" | "false" | "nil" | NUMBER | STRING | "(" expression ")"
//! ```

pub mod expr;
pub mod parser;
