//! Error types and diagnostic collection.
//!
//! This module defines the errors raised while scanning, parsing and
//! evaluating. It includes:
//!
//! - Error structures carrying the 1-based source line
//! - One variant per failure kind, with its diagnostic message
//! - Tips naming the offending character, token or operand
//! - A diagnostic sink that accumulates errors and renders them

pub mod diagnostics;
pub mod errors;
