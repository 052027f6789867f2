use std::fmt;

use ndarray::{Array1, Array2, ArrayBase, ArrayD, ArrayView2, CowArray, Data, Dimension, Ix2};
use sprs::CsMat;

use crate::error::{CheckResult, InvalidInput};

/// An argument handed to one of the checks.
///
/// Each operation decides which variants it accepts; anything else is
/// rejected with [`InvalidInput::UnsupportedKind`] rather than a panic.
#[derive(Clone, Debug)]
pub enum Operand {
    /// Dense array of any dimensionality.
    Dense(ArrayD<f64>),
    /// Compressed sparse matrix, in either CSC or CSR storage.
    Sparse(CsMat<f64>),
    /// Plain row-major nested list. Never accepted, it must be turned into
    /// an array first.
    Nested(Vec<Vec<f64>>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    Dense,
    SparseCsc,
    SparseCsr,
    Nested,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperandKind::Dense => "dense array",
            OperandKind::SparseCsc => "CSC sparse matrix",
            OperandKind::SparseCsr => "CSR sparse matrix",
            OperandKind::Nested => "nested list",
        };
        write!(f, "{}", name)
    }
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Dense(_) => OperandKind::Dense,
            Operand::Sparse(m) if m.is_csc() => OperandKind::SparseCsc,
            Operand::Sparse(_) => OperandKind::SparseCsr,
            Operand::Nested(_) => OperandKind::Nested,
        }
    }
}

impl From<ArrayD<f64>> for Operand {
    fn from(value: ArrayD<f64>) -> Self {
        Operand::Dense(value)
    }
}

impl From<Array2<f64>> for Operand {
    fn from(value: Array2<f64>) -> Self {
        Operand::Dense(value.into_dyn())
    }
}

impl From<Array1<f64>> for Operand {
    fn from(value: Array1<f64>) -> Self {
        Operand::Dense(value.into_dyn())
    }
}

impl From<CsMat<f64>> for Operand {
    fn from(value: CsMat<f64>) -> Self {
        Operand::Sparse(value)
    }
}

impl From<Vec<Vec<f64>>> for Operand {
    fn from(value: Vec<Vec<f64>>) -> Self {
        Operand::Nested(value)
    }
}

/// Accept a dense 2-D array or a CSC matrix (densified) and require it to
/// be square.
pub(crate) fn square_matrix<'a>(
    a: &'a Operand,
    operation: &'static str,
) -> CheckResult<CowArray<'a, f64, Ix2>> {
    let matrix = match a {
        Operand::Dense(dense) => CowArray::from(dense_matrix_view(dense, "A", operation)?),
        Operand::Sparse(sparse) if sparse.is_csc() => CowArray::from(sparse.to_dense()),
        other => {
            return Err(InvalidInput::UnsupportedKind {
                operation,
                kind: other.kind(),
            }
            .logged(operation))
        }
    };

    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(InvalidInput::NotSquare { rows, cols }.logged(operation));
    }
    Ok(matrix)
}

/// Borrow the dense payload of an operand; every other kind is rejected.
pub(crate) fn expect_dense<'a>(
    operand: &'a Operand,
    operation: &'static str,
) -> CheckResult<&'a ArrayD<f64>> {
    match operand {
        Operand::Dense(a) => Ok(a),
        other => Err(InvalidInput::UnsupportedKind {
            operation,
            kind: other.kind(),
        }
        .logged(operation)),
    }
}

pub(crate) fn dense_matrix_view<'a>(
    a: &'a ArrayD<f64>,
    name: &'static str,
    operation: &'static str,
) -> CheckResult<ArrayView2<'a, f64>> {
    a.view().into_dimensionality::<Ix2>().map_err(|_| {
        InvalidInput::Dimensionality {
            operand: name,
            expected: 2,
            found: a.ndim(),
        }
        .logged(operation)
    })
}

pub(crate) fn ensure_finite<S, D>(
    a: &ArrayBase<S, D>,
    name: &'static str,
    operation: &'static str,
) -> CheckResult<()>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if a.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(InvalidInput::NonFinite { operand: name }.logged(operation))
    }
}
