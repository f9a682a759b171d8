//! RQ split of a tensor at a pivot axis.
//!
//! There is no separate RQ kernel: the matricization is reversed along
//! both axes and conjugate-transposed, handed to the QR backend, and the
//! factors are mapped back.
//!
//! ```text
//! B = J_n · M^H · J_m = Q' · R'
//! M = (J_m · R'^H · J_k) · (J_k · Q'^H · J_n) = R · Q
//! ```
//!
//! `J_x` reverses `x` rows or columns. `R'^H` is lower triangular, so
//! reversing both of its axes makes `R` upper triangular, while `Q` keeps
//! orthonormal rows.

use faer::MatRef;
use faer::linalg::solvers::Qr;
use faer_traits::math_utils::conj;

use crate::backend::collect_column_major;
use crate::decomposition::util::{ensure_finite, matricize};
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Result of an RQ split.
#[derive(Debug, Clone)]
pub struct RqResult<ElT: Scalar> {
    /// Upper triangular factor.
    /// Shape: [...left_dims..., k] where k = min(m, n)
    pub r: DenseTensor<ElT>,

    /// Factor with orthonormal rows.
    /// Shape: [k, ...right_dims...]
    pub q: DenseTensor<ElT>,

    /// The bond dimension k = min(m, n).
    pub rank: usize,
}

/// Split a tensor with a thin RQ decomposition, `M = R · Q`.
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
/// use tndecomp::decomposition::rq_decomposition;
///
/// let t = Tensor::<f64>::zeros(&[2, 3, 4, 5]);
/// let result = rq_decomposition(&t, 2).unwrap();
/// assert_eq!(result.r.shape(), &[2, 3, 6]);
/// assert_eq!(result.q.shape(), &[6, 4, 5]);
/// ```
pub fn rq_decomposition<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    pivot_axis: usize,
) -> Result<RqResult<ElT>, TensorError> {
    let shape = matricize(tensor, pivot_axis)?;
    let (m, n) = (shape.nrows, shape.ncols);
    let k = shape.min_dim();

    if k == 0 {
        return Ok(RqResult {
            r: DenseTensor::zeros(&shape.left_shape(0)),
            q: DenseTensor::zeros(&shape.right_shape(0)),
            rank: 0,
        });
    }
    ensure_finite(tensor, "rq")?;

    let data = tensor.data();
    // B[a, b] = conj(M[m - 1 - b, n - 1 - a])
    let reversed = collect_column_major(n, m, |a, b| {
        conj(&data[(m - 1 - b) + (n - 1 - a) * m])
    });

    let qr_result: Qr<ElT> = Qr::new(MatRef::from_column_major_slice(&reversed, n, m));
    let q_rev = qr_result.compute_thin_Q();
    let r_rev = qr_result.thin_R();

    let r_data = collect_column_major(m, k, |i, j| conj(&r_rev[(k - 1 - j, m - 1 - i)]));
    let q_data = collect_column_major(k, n, |i, j| conj(&q_rev[(n - 1 - j, k - 1 - i)]));

    let r = DenseTensor::from_vec(r_data, &shape.left_shape(k))?;
    let q = DenseTensor::from_vec(q_data, &shape.right_shape(k))?;

    Ok(RqResult { r, q, rank: k })
}
