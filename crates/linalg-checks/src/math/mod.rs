//! Argument types and shared validation helpers.
//!
//! `Operand` is the tagged union of everything a caller may pass to a check
//! (dense `ndarray` arrays, `sprs` compressed matrices and plain nested
//! lists). The helpers here turn an operand into a typed 1-D or 2-D view or
//! report why it cannot be one.
pub mod matrix;
pub mod vector;

pub use matrix::{Operand, OperandKind};
pub use vector::euclidean_norm;
