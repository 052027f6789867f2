use ndarray::{ArrayBase, ArrayD, ArrayView1, Data, Ix1};

use crate::error::{CheckResult, InvalidInput};

pub(crate) fn dense_vector_view<'a>(
    v: &'a ArrayD<f64>,
    name: &'static str,
    operation: &'static str,
) -> CheckResult<ArrayView1<'a, f64>> {
    v.view().into_dimensionality::<Ix1>().map_err(|_| {
        InvalidInput::Dimensionality {
            operand: name,
            expected: 1,
            found: v.ndim(),
        }
        .logged(operation)
    })
}

/// Euclidean (L2) norm, `sqrt(v · v)`.
pub fn euclidean_norm<S>(v: &ArrayBase<S, Ix1>) -> f64
where
    S: Data<Elem = f64>,
{
    v.dot(v).sqrt()
}
