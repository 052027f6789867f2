//! Diagonal dominance of square matrices.
//!
//! Accepts dense 2-D arrays and CSC sparse matrices. The default test is
//! strict: every row must satisfy `|a_ii| > sum_{j != i} |a_ij|`. Weak
//! dominance (`>=`) is only used when requested through [`CheckConfig`].

use ndarray::{Array1, ArrayBase, Data, Ix2};

use crate::config::CheckConfig;
use crate::error::CheckResult;
use crate::math::matrix::{ensure_finite, square_matrix};
use crate::math::Operand;

/// Check whether `a` is strictly diagonally dominant.
///
/// # Arguments
///
/// * `a` - A square dense array or CSC sparse matrix.
///
/// # Returns
///
/// `Ok(true)` if every row is strictly dominant, `Ok(false)` if at least one
/// row is not, and `Err(InvalidInput)` if `a` is not a square 2-D dense or
/// CSC matrix. An empty 0x0 matrix is dominant.
pub fn is_diagonally_dominant(a: &Operand) -> CheckResult<bool> {
    is_diagonally_dominant_with(a, &CheckConfig::default())
}

/// Same as [`is_diagonally_dominant`], with the row comparison and the
/// finiteness requirement taken from `config`.
pub fn is_diagonally_dominant_with(a: &Operand, config: &CheckConfig) -> CheckResult<bool> {
    const OPERATION: &str = "is_diagonally_dominant";

    let matrix = square_matrix(a, OPERATION)?;
    if config.require_finite {
        ensure_finite(&matrix, "A", OPERATION)?;
    }

    let dominant = row_terms(&matrix)
        .into_iter()
        .enumerate()
        .all(|(row, (diag, offdiag_sum))| {
            let holds = config.dominance.holds(diag, offdiag_sum);
            if !holds {
                log::trace!(
                    "{}: row {} fails {:?} dominance (|diag| = {}, off-diagonal sum = {})",
                    OPERATION,
                    row,
                    config.dominance,
                    diag,
                    offdiag_sum
                );
            }
            holds
        });

    Ok(dominant)
}

/// Per-row dominance margins `|a_ii| - sum_{j != i} |a_ij|`.
///
/// Validation is identical to [`is_diagonally_dominant`]. The matrix is
/// strictly dominant exactly when every margin is positive.
pub fn dominance_margins(a: &Operand) -> CheckResult<Array1<f64>> {
    let matrix = square_matrix(a, "dominance_margins")?;
    Ok(row_terms(&matrix)
        .into_iter()
        .map(|(diag, offdiag_sum)| diag - offdiag_sum)
        .collect())
}

/// `(|a_ii|, sum_j |a_ij| - |a_ii|)` for every row of a square matrix.
fn row_terms<S>(matrix: &ArrayBase<S, Ix2>) -> Vec<(f64, f64)>
where
    S: Data<Elem = f64>,
{
    matrix
        .outer_iter()
        .enumerate()
        .map(|(i, row)| {
            let diag = row[i].abs();
            let row_sum: f64 = row.iter().map(|v| v.abs()).sum();
            (diag, row_sum - diag)
        })
        .collect()
}
