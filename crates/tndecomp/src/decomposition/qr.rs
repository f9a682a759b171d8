//! QR split of a tensor at a pivot axis.

use faer::linalg::solvers::Qr;

use crate::backend::{AsFaerMat, tensor_from_faer_mat};
use crate::decomposition::util::{ensure_finite, matricize};
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Result of a QR split.
#[derive(Debug, Clone)]
pub struct QrResult<ElT: Scalar> {
    /// Factor with orthonormal columns.
    /// Shape: [...left_dims..., k] where k = min(m, n)
    pub q: DenseTensor<ElT>,

    /// Upper triangular factor.
    /// Shape: [k, ...right_dims...]
    pub r: DenseTensor<ElT>,

    /// The bond dimension k = min(m, n).
    pub rank: usize,
}

/// Split a tensor with a thin QR decomposition.
///
/// For the `m x n` matricization `M`, produces `Q` (`m x k`, orthonormal
/// columns) and `R` (`k x n`, upper triangular) with `M = Q · R`. No
/// truncation is applied.
///
/// # Errors
///
/// - `TensorError::InvalidPivot` if `pivot_axis > ndim`
/// - `TensorError::ComputationFailure` if the matrix has non-finite entries
///
/// # Example
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::decomposition::qr_decomposition;
///
/// let t = Tensor::<f64>::zeros(&[2, 3, 4, 5]);
/// let result = qr_decomposition(&t, 2).unwrap();
/// assert_eq!(result.q.shape(), &[2, 3, 6]);
/// assert_eq!(result.r.shape(), &[6, 4, 5]);
/// ```
pub fn qr_decomposition<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    pivot_axis: usize,
) -> Result<QrResult<ElT>, TensorError> {
    let shape = matricize(tensor, pivot_axis)?;
    let (m, n) = (shape.nrows, shape.ncols);
    let k = shape.min_dim();

    if k == 0 {
        return Ok(QrResult {
            q: DenseTensor::zeros(&shape.left_shape(0)),
            r: DenseTensor::zeros(&shape.right_shape(0)),
            rank: 0,
        });
    }
    ensure_finite(tensor, "qr")?;

    let qr_result: Qr<ElT> = Qr::new(tensor.as_faer_mat(m, n));
    let q_mat = qr_result.compute_thin_Q();

    let q = tensor_from_faer_mat(q_mat.as_ref()).into_shape(&shape.left_shape(k))?;
    let r = tensor_from_faer_mat(qr_result.thin_R()).into_shape(&shape.right_shape(k))?;

    Ok(QrResult { q, r, rank: k })
}
