//! Matricization of tensors at a pivot axis.

use faer_traits::math_utils::is_finite;
use log::{trace, warn};

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Shape bookkeeping for a tensor viewed as a matrix.
///
/// The tensor buffer itself is reused as the column-major matrix; only
/// the two axis groups are kept so the factors can be restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matricized {
    /// Product of the left axis sizes (1 if there are none).
    pub nrows: usize,
    /// Product of the right axis sizes (1 if there are none).
    pub ncols: usize,
    /// Axis sizes `[0, pivot)`.
    pub left_dims: Vec<usize>,
    /// Axis sizes `[pivot, ndim)`.
    pub right_dims: Vec<usize>,
}

impl Matricized {
    /// Number of singular values / bond dimension of a full factorization.
    pub fn min_dim(&self) -> usize {
        self.nrows.min(self.ncols)
    }

    /// Shape `[left_dims..., bond]` of a left factor.
    pub fn left_shape(&self, bond: usize) -> Vec<usize> {
        let mut shape = self.left_dims.clone();
        shape.push(bond);
        shape
    }

    /// Shape `[bond, right_dims...]` of a right factor.
    pub fn right_shape(&self, bond: usize) -> Vec<usize> {
        let mut shape = Vec::with_capacity(self.right_dims.len() + 1);
        shape.push(bond);
        shape.extend_from_slice(&self.right_dims);
        shape
    }
}

/// Split a tensor's axes at `pivot_axis` into matrix rows and columns.
///
/// # Errors
///
/// `TensorError::InvalidPivot` unless `pivot_axis <= tensor.ndim()`.
///
/// # Example
///
/// ```
/// use tndecomp::Tensor;
/// use tndecomp::decomposition::matricize;
///
/// let t = Tensor::<f64>::ones(&[2, 3, 4]);
/// let m = matricize(&t, 2).unwrap();
/// assert_eq!((m.nrows, m.ncols), (6, 4));
/// assert_eq!(m.left_dims, vec![2, 3]);
/// assert_eq!(m.right_dims, vec![4]);
/// ```
pub fn matricize<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    pivot_axis: usize,
) -> Result<Matricized, TensorError> {
    let ndim = tensor.ndim();
    if pivot_axis > ndim {
        return Err(TensorError::InvalidPivot {
            pivot: pivot_axis,
            ndim,
        });
    }

    let (left, right) = tensor.shape().split_at(pivot_axis);
    let matricized = Matricized {
        nrows: left.iter().product(),
        ncols: right.iter().product(),
        left_dims: left.to_vec(),
        right_dims: right.to_vec(),
    };
    trace!(
        "matricize {:?} at pivot {} -> {} x {}",
        tensor.shape(),
        pivot_axis,
        matricized.nrows,
        matricized.ncols
    );
    Ok(matricized)
}

/// Reject matrices the backend cannot meaningfully factor.
pub(crate) fn ensure_finite<ElT: Scalar>(
    tensor: &DenseTensor<ElT>,
    routine: &'static str,
) -> Result<(), TensorError> {
    if tensor.data().iter().all(is_finite) {
        return Ok(());
    }
    warn!("{routine}: refusing matrix with non-finite entries");
    Err(TensorError::ComputationFailure {
        routine,
        message: "matrix contains non-finite entries".to_string(),
    })
}
