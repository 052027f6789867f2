//! Residuals of a linear system `Ax = b`.
//!
//! Only dense arrays are accepted here, sparse matrices are rejected even
//! though the dominance check takes them.

use ndarray::Array1;

use crate::config::CheckConfig;
use crate::error::{CheckResult, InvalidInput};
use crate::math::matrix::{dense_matrix_view, ensure_finite, expect_dense};
use crate::math::vector::{dense_vector_view, euclidean_norm};
use crate::math::Operand;

/// Compute the residual vector `r = b - A x`.
///
/// # Arguments
///
/// * `a` - Dense matrix of shape (m, n).
/// * `x` - Dense vector of length n.
/// * `b` - Dense vector of length m.
///
/// # Returns
///
/// The residual of length m, or `Err(InvalidInput)` if any argument is not
/// dense, has the wrong number of dimensions, or the shapes disagree.
pub fn residual(a: &Operand, x: &Operand, b: &Operand) -> CheckResult<Array1<f64>> {
    residual_checked(a, x, b, &CheckConfig::default(), "residual")
}

/// Euclidean norm of the residual, `||b - A x||_2`.
///
/// Validation is identical to [`residual`]. When `x` solves the system
/// exactly the result is `0.0`.
pub fn residual_norm(a: &Operand, x: &Operand, b: &Operand) -> CheckResult<f64> {
    residual_norm_with(a, x, b, &CheckConfig::default())
}

pub fn residual_norm_with(
    a: &Operand,
    x: &Operand,
    b: &Operand,
    config: &CheckConfig,
) -> CheckResult<f64> {
    let r = residual_checked(a, x, b, config, "residual_norm")?;
    Ok(euclidean_norm(&r))
}

fn residual_checked(
    a: &Operand,
    x: &Operand,
    b: &Operand,
    config: &CheckConfig,
    operation: &'static str,
) -> CheckResult<Array1<f64>> {
    // kinds, then dimensionality, then shapes
    let a = expect_dense(a, operation)?;
    let x = expect_dense(x, operation)?;
    let b = expect_dense(b, operation)?;

    let a = dense_matrix_view(a, "A", operation)?;
    let b = dense_vector_view(b, "b", operation)?;
    let x = dense_vector_view(x, "x", operation)?;

    let (rows, cols) = a.dim();
    if cols != x.len() {
        return Err(InvalidInput::ShapeMismatch {
            operand: "x",
            expected: cols,
            found: x.len(),
        }
        .logged(operation));
    }
    if rows != b.len() {
        return Err(InvalidInput::ShapeMismatch {
            operand: "b",
            expected: rows,
            found: b.len(),
        }
        .logged(operation));
    }

    if config.require_finite {
        ensure_finite(&a, "A", operation)?;
        ensure_finite(&x, "x", operation)?;
        ensure_finite(&b, "b", operation)?;
    }

    Ok(&b - &a.dot(&x))
}
