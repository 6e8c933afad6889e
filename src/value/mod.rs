//! Runtime values produced by literals and by operator evaluation.
//!
//! Values form a closed union over numbers, strings, booleans and nil.
//! Every operator in the interpreter matches exhaustively over it.

pub mod value;

#[cfg(test)]
mod tests;
