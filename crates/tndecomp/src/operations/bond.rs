//! Contraction and scaling along a bond axis.
//!
//! A split at a pivot produces a left factor `[left..., k]` and a right
//! factor `[k, right...]`. Contracting the shared `k` axis is the inverse
//! of the split; in column-major order it is a plain `m x k` by `k x n`
//! matrix product over the flat buffers, which faer computes.

use faer::Mat;
use faer_traits::math_utils::mul_real;

use crate::backend::{AsFaerMat, tensor_from_faer_mat};
use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Contract the last axis of `left` with the first axis of `right`.
///
/// # Errors
///
/// - `TensorError::NoBondAxis` if either tensor has rank 0
/// - `TensorError::BondMismatch` if the two axis sizes differ
///
/// # Example
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::operations::contract_bond;
///
/// let a = Tensor::<f64>::ones(&[2, 3, 4]);
/// let b = Tensor::<f64>::ones(&[4, 5]);
/// let c = contract_bond(&a, &b).unwrap();
/// assert_eq!(c.shape(), &[2, 3, 5]);
/// assert_eq!(c.get(&[1, 2, 4]), Some(&4.0));
/// ```
pub fn contract_bond<ElT: Scalar>(
    left: &DenseTensor<ElT>,
    right: &DenseTensor<ElT>,
) -> Result<DenseTensor<ElT>, TensorError> {
    let (&k, outer_left) = left.shape().split_last().ok_or(TensorError::NoBondAxis)?;
    let (&k_right, outer_right) = right.shape().split_first().ok_or(TensorError::NoBondAxis)?;
    if k != k_right {
        return Err(TensorError::BondMismatch {
            left: k,
            right: k_right,
        });
    }

    let shape: Vec<usize> = outer_left.iter().chain(outer_right).copied().collect();
    if k == 0 {
        return Ok(DenseTensor::zeros(&shape));
    }

    let m: usize = outer_left.iter().product();
    let n: usize = outer_right.iter().product();
    let product: Mat<ElT> = left.as_faer_mat(m, k) * right.as_faer_mat(k, n);

    tensor_from_faer_mat(product.as_ref()).into_shape(&shape)
}

/// Multiply slice `p` of the last axis of `tensor` by `weights[p]`.
///
/// Used to absorb singular values into a left factor.
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::operations::scale_bond;
///
/// let u = Tensor::<f64>::ones(&[2, 2]);
/// let s = Tensor::from_vec(vec![3.0, 0.5], &[2]).unwrap();
/// let us = scale_bond(&u, &s).unwrap();
/// assert_eq!(us.data(), &[3.0, 3.0, 0.5, 0.5]);
/// ```
pub fn scale_bond<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    weights: &DenseTensor<f64>,
) -> Result<DenseTensor<ElT>, TensorError> {
    let &k = tensor.shape().last().ok_or(TensorError::NoBondAxis)?;
    if weights.len() != k {
        return Err(TensorError::BondMismatch {
            left: k,
            right: weights.len(),
        });
    }

    let mut scaled = tensor.clone();
    if k == 0 {
        return Ok(scaled);
    }
    let m = tensor.len() / k;
    for (p, &w) in weights.data().iter().enumerate() {
        for x in &mut scaled.data_mut()[p * m..(p + 1) * m] {
            *x = mul_real(x, &w);
        }
    }
    Ok(scaled)
}
