//! Tree-walking evaluation of expression trees.
//!
//! The interpreter is one implementation of the expression visitor. It
//! evaluates operands eagerly, left before right, and fails with an error
//! bound to the operator token when an operand has the wrong type.

pub mod interpreter;
