//! Tensor norm operations.

use faer_traits::math_utils::abs2;

use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Frobenius norm of a tensor.
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::operations::norm;
///
/// let t = Tensor::from_vec(vec![3.0, 4.0], &[2]).unwrap();
/// assert!((norm(&t) - 5.0).abs() < 1e-10);
/// ```
pub fn norm<ElT: Scalar>(tensor: &DenseTensor<ElT>) -> f64 {
    norm_sqr(tensor).sqrt()
}

/// Squared Frobenius norm of a tensor.
pub fn norm_sqr<ElT: Scalar>(tensor: &DenseTensor<ElT>) -> f64 {
    tensor.data().iter().map(abs2).sum()
}
