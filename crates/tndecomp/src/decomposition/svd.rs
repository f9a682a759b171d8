//! Truncated singular value decomposition of a tensor at a pivot axis.

use faer::linalg::solvers::{Svd, SvdError};
use faer_traits::math_utils::{conj, real};
use log::debug;

use crate::backend::{AsFaerMat, collect_column_major};
use crate::decomposition::truncation::{TruncationParams, retained_count};
use crate::decomposition::util::{Matricized, ensure_finite, matricize};
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Result of an SVD split.
#[derive(Debug, Clone)]
pub struct SvdResult<ElT: Scalar> {
    /// Left singular vectors.
    /// Shape: [...left_dims..., rank]
    pub u: DenseTensor<ElT>,

    /// Kept singular values, descending.
    /// Shape: [rank]
    pub s: DenseTensor<f64>,

    /// Conjugate-transposed right singular vectors.
    /// Shape: [rank, ...right_dims...]
    pub vh: DenseTensor<ElT>,

    /// Discarded singular values, descending.
    pub truncated: Vec<f64>,

    /// Number of kept singular values.
    pub rank: usize,
}

impl<ElT: Scalar> SvdResult<ElT> {
    /// Frobenius norm of the difference between the input and
    /// `u · diag(s) · vh`, i.e. the norm of the discarded values.
    pub fn truncation_error(&self) -> f64 {
        // smallest first, the order in which the tail was accumulated
        self.truncated.iter().rev().map(|s| s * s).sum::<f64>().sqrt()
    }
}

/// Thin SVD without truncation.
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::decomposition::svd;
///
/// let t = Tensor::<f64>::zeros(&[2, 3, 4, 5]);
/// let result = svd(&t, 2).unwrap();
/// assert_eq!(result.u.shape(), &[2, 3, 6]);
/// assert_eq!(result.s.shape(), &[6]);
/// assert_eq!(result.vh.shape(), &[6, 4, 5]);
/// ```
pub fn svd<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    pivot_axis: usize,
) -> Result<SvdResult<ElT>, TensorError> {
    svd_decomposition(tensor, pivot_axis, &TruncationParams::default())
}

/// Split a tensor with a (possibly truncated) singular value decomposition.
///
/// Axes `[0, pivot_axis)` become the rows and `[pivot_axis, ndim)` the
/// columns of a matrix `M`. With `M = U · diag(S) · Vh`, the first `k`
/// columns of `U`, entries of `S` and rows of `Vh` are kept, where `k`
/// follows from `params` (see [`retained_count`]).
///
/// # Errors
///
/// - `TensorError::InvalidPivot` if `pivot_axis > ndim`
/// - `TensorError::InvalidTruncation` for a zero count bound or a negative
///   error bound
/// - `TensorError::ComputationFailure` if the matrix has non-finite entries
///   or the backend does not converge
///
/// # Example
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::decomposition::{TruncationParams, svd_decomposition};
///
/// let t = Tensor::<f64>::ones(&[4, 4]);
/// let params = TruncationParams::default().with_max_truncation_error(1e-10);
/// let result = svd_decomposition(&t, 1, &params).unwrap();
///
/// // a matrix of ones has rank one
/// assert_eq!(result.rank, 1);
/// assert_eq!(result.truncated.len(), 3);
/// ```
pub fn svd_decomposition<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    pivot_axis: usize,
    params: &TruncationParams,
) -> Result<SvdResult<ElT>, TensorError> {
    let shape = matricize(tensor, pivot_axis)?;
    params.validate()?;

    let Matricized { nrows, ncols, .. } = shape;
    if shape.min_dim() == 0 {
        return empty_result(&shape);
    }
    ensure_finite(tensor, "svd")?;

    let mat = tensor.as_faer_mat(nrows, ncols);
    let svd_result: Svd<ElT> =
        Svd::new_thin(mat).map_err(|e: SvdError| TensorError::ComputationFailure {
            routine: "svd",
            message: format!("{:?}", e),
        })?;

    let u_mat = svd_result.U();
    let s_diag = svd_result.S();
    let v_mat = svd_result.V();

    // faer stores the (real) singular values in the element type
    let singular_values: Vec<f64> = (0..shape.min_dim()).map(|k| real(&s_diag[k])).collect();

    let rank = retained_count(&singular_values, params);
    let truncated = singular_values[rank..].to_vec();
    if rank < singular_values.len() {
        debug!(
            "svd truncated {} -> {} singular values, discarded norm {:e}",
            singular_values.len(),
            rank,
            truncated.iter().map(|s| s * s).sum::<f64>().sqrt()
        );
    }

    let u_data = collect_column_major(nrows, rank, |i, j| u_mat[(i, j)]);
    // Vh[i, j] = conj(V[j, i])
    let vh_data = collect_column_major(rank, ncols, |i, j| conj(&v_mat[(j, i)]));

    let u = DenseTensor::from_vec(u_data, &shape.left_shape(rank))?;
    let s = DenseTensor::from_vec(singular_values[..rank].to_vec(), &[rank])?;
    let vh = DenseTensor::from_vec(vh_data, &shape.right_shape(rank))?;

    Ok(SvdResult {
        u,
        s,
        vh,
        truncated,
        rank,
    })
}

fn empty_result<ElT: Scalar>(shape: &Matricized) -> Result<SvdResult<ElT>, TensorError> {
    Ok(SvdResult {
        u: DenseTensor::zeros(&shape.left_shape(0)),
        s: DenseTensor::zeros(&[0]),
        vh: DenseTensor::zeros(&shape.right_shape(0)),
        truncated: Vec::new(),
        rank: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{contract_bond, norm, scale_bond};
    use crate::scalar::c64;
    use approx::assert_relative_eq;

    fn reconstruct<ElT: Scalar>(result: &SvdResult<ElT>) -> DenseTensor<ElT> {
        let us = scale_bond(&result.u, &result.s).unwrap();
        contract_bond(&us, &result.vh).unwrap()
    }

    #[test]
    fn test_svd_2d() {
        let t = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let result = svd(&t, 1).unwrap();

        assert_eq!(result.u.shape(), &[2, 2]);
        assert_eq!(result.s.shape(), &[2]);
        assert_eq!(result.vh.shape(), &[2, 3]);
        assert!(result.truncated.is_empty());

        let reconstructed = reconstruct(&result);
        assert_eq!(reconstructed.shape(), t.shape());
        for (a, b) in reconstructed.data().iter().zip(t.data()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_svd_3d() {
        let t = DenseTensor::<f64>::ones(&[2, 3, 4]);
        let result = svd(&t, 2).unwrap();

        assert_eq!(result.u.shape(), &[2, 3, 4]);
        assert_eq!(result.vh.shape(), &[4, 4]);

        let reconstructed = reconstruct(&result);
        for (a, b) in reconstructed.data().iter().zip(t.data()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_svd_complex() {
        let data: Vec<c64> = (0..12)
            .map(|x| c64::new(x as f64, (x % 5) as f64 - 2.0))
            .collect();
        let t = DenseTensor::from_vec(data, &[3, 2, 2]).unwrap();
        let result = svd(&t, 1).unwrap();

        assert_eq!(result.u.shape(), &[3, 3]);
        assert_eq!(result.vh.shape(), &[3, 2, 2]);

        let reconstructed = reconstruct(&result);
        for (a, b) in reconstructed.data().iter().zip(t.data()) {
            assert_relative_eq!(a.re, b.re, epsilon = 1e-10);
            assert_relative_eq!(a.im, b.im, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_singular_values_ordered() {
        let t = DenseTensor::from_vec(vec![1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 3.0], &[3, 3])
            .unwrap();
        let result = svd(&t, 1).unwrap();

        assert_relative_eq!(result.s.data()[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(result.s.data()[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(result.s.data()[2], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_truncation_error_matches_residual() {
        let data: Vec<f64> = (0..30).map(|x| ((x * 7) % 11) as f64 - 5.0).collect();
        let t = DenseTensor::from_vec(data, &[5, 6]).unwrap();
        let params = TruncationParams::default().with_max_singular_values(2);
        let result = svd_decomposition(&t, 1, &params).unwrap();

        assert_eq!(result.rank, 2);
        assert_eq!(result.truncated.len(), 3);

        let approx = reconstruct(&result);
        let residual: Vec<f64> = approx
            .data()
            .iter()
            .zip(t.data())
            .map(|(a, b)| a - b)
            .collect();
        let residual = DenseTensor::from_vec(residual, &[5, 6]).unwrap();
        assert_relative_eq!(norm(&residual), result.truncation_error(), epsilon = 1e-10);
    }

    #[test]
    fn test_rank_one_by_error_bound() {
        // second column is twice the first
        let t = DenseTensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 2.0, 4.0, 6.0, 8.0], &[4, 2])
            .unwrap();
        let params = TruncationParams::default().with_max_truncation_error(1e-8);
        let result = svd_decomposition(&t, 1, &params).unwrap();

        assert_eq!(result.rank, 1);
        assert_eq!(result.u.shape(), &[4, 1]);
        assert_eq!(result.vh.shape(), &[1, 2]);
        assert_relative_eq!(result.truncated[0], 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_zero_sized_axis() {
        let t = DenseTensor::<f64>::zeros(&[2, 0, 3]);
        let result = svd(&t, 1).unwrap();

        assert_eq!(result.rank, 0);
        assert_eq!(result.u.shape(), &[2, 0]);
        assert_eq!(result.s.shape(), &[0]);
        assert_eq!(result.vh.shape(), &[0, 0, 3]);
    }

    #[test]
    fn test_invalid_arguments() {
        let t = DenseTensor::<f64>::ones(&[2, 3]);

        let err = svd(&t, 3).unwrap_err();
        assert!(matches!(err, TensorError::InvalidPivot { pivot: 3, ndim: 2 }));

        let params = TruncationParams::default().with_max_truncation_error(-1.0);
        let err = svd_decomposition(&t, 1, &params).unwrap_err();
        assert!(matches!(err, TensorError::InvalidTruncation { .. }));

        let params = TruncationParams::default().with_max_singular_values(0);
        assert!(svd_decomposition(&t, 1, &params).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_non_finite_input() {
        let mut t = DenseTensor::<f64>::ones(&[3, 3]);
        t.set(&[2, 2], f64::INFINITY).unwrap();

        let err = svd(&t, 1).unwrap_err();
        assert!(err.is_computation_failure());
    }
}
