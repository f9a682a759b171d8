//! Zero-copy views of tensors as faer matrices.

use faer::MatRef;

use crate::scalar::Scalar;
use crate::tensor::{DenseTensor, Tensor};

/// Extension trait for viewing a tensor's buffer as a faer matrix.
pub trait AsFaerMat<T: Scalar> {
    /// View the tensor data as an immutable `rows x cols` column-major
    /// matrix (zero-copy).
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols != tensor.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tndecomp::Tensor;
    /// use tndecomp::backend::AsFaerMat;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let mat = t.as_faer_mat(2, 3);
    /// assert_eq!(mat.nrows(), 2);
    /// assert_eq!(mat.ncols(), 3);
    /// ```
    fn as_faer_mat(&self, rows: usize, cols: usize) -> MatRef<'_, T>;
}

impl<T: Scalar> AsFaerMat<T> for DenseTensor<T> {
    fn as_faer_mat(&self, rows: usize, cols: usize) -> MatRef<'_, T> {
        assert_eq!(
            rows * cols,
            self.len(),
            "Matrix dimensions ({} x {} = {}) must match tensor size ({})",
            rows,
            cols,
            rows * cols,
            self.len()
        );
        MatRef::from_column_major_slice(self.data(), rows, cols)
    }
}

/// Build a column-major buffer of `nrows x ncols` entries from an element
/// function `f(i, j)`.
///
/// Used to copy a kept window of a faer factor, possibly reversed or
/// conjugate-transposed, into tensor storage.
///
/// ```
/// use tndecomp::backend::collect_column_major;
///
/// let data: Vec<f64> = collect_column_major(2, 2, |i, j| (10 * i + j) as f64);
/// assert_eq!(data, vec![0.0, 10.0, 1.0, 11.0]);
/// ```
pub fn collect_column_major<T, F>(nrows: usize, ncols: usize, mut f: F) -> Vec<T>
where
    F: FnMut(usize, usize) -> T,
{
    let mut data = Vec::with_capacity(nrows * ncols);
    for j in 0..ncols {
        for i in 0..nrows {
            data.push(f(i, j));
        }
    }
    data
}

/// Copy a faer matrix into a `[rows, cols]` tensor.
///
/// ```
/// use faer::Mat;
/// use tndecomp::backend::tensor_from_faer_mat;
///
/// let mat = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
/// let tensor = tensor_from_faer_mat(mat.as_ref());
/// assert_eq!(tensor.shape(), &[2, 3]);
/// ```
pub fn tensor_from_faer_mat<T: Scalar>(mat: MatRef<'_, T>) -> DenseTensor<T> {
    let (rows, cols) = (mat.nrows(), mat.ncols());
    let data = collect_column_major(rows, cols, |i, j| mat[(i, j)]);
    Tensor::from_vec(data, &[rows, cols]).expect("collected buffer matches matrix size")
}
