//! linalg-checks: input-validated checks for small linear-algebra problems.
//!
//! This crate provides two independent, stateless operations:
//!
//! * [`is_diagonally_dominant`] classifies a square dense or CSC sparse matrix.
//! * [`residual_norm`] computes `||b - A x||_2` for dense `A`, `x` and `b`.
//!
//! Malformed input never panics. Every operation returns
//! `Result<_, InvalidInput>`, so an invalid argument can not be confused
//! with a `false` answer or a zero norm. Arguments are passed as
//! [`Operand`], built from `ndarray` arrays or `sprs` matrices with `into()`.
pub mod config;
pub mod dominance;
pub mod error;
pub mod math;
pub mod residual;

pub use config::{CheckConfig, DominanceKind};
pub use dominance::{dominance_margins, is_diagonally_dominant, is_diagonally_dominant_with};
pub use error::{CheckResult, InvalidInput};
pub use math::{Operand, OperandKind};
pub use residual::{residual, residual_norm, residual_norm_with};
