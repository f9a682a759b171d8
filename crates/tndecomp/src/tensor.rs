//! Dense n-dimensional tensor in column-major order.

use crate::error::TensorError;
use crate::scalar::Scalar;
use crate::strides::{cartesian_to_linear, compute_strides};

/// An owned n-dimensional tensor.
///
/// Elements are stored in a flat buffer with the first axis varying
/// fastest. A rank-0 tensor holds exactly one element; a tensor with a
/// zero-sized axis holds none.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<ElT: Scalar> {
    data: Vec<ElT>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

/// Dense tensors are the only kind this crate decomposes.
pub type DenseTensor<ElT> = Tensor<ElT>;

impl<ElT: Scalar> Tensor<ElT> {
    /// Create a zero-initialized tensor.
    ///
    /// # Examples
    ///
    /// ```
    /// use tndecomp::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: vec![ElT::zero(); shape.iter().product()],
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let mut t = Self::zeros(shape);
        t.fill(ElT::one());
        t
    }

    /// Create a tensor from column-major data.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the data length differs from
    /// the product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tndecomp::{DenseTensor, Tensor};
    ///
    /// let t: DenseTensor<f64> = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// assert_eq!(t.get(&[1, 0]), Some(&2.0));
    /// assert_eq!(t.get(&[0, 1]), Some(&3.0));
    /// ```
    pub fn from_vec(data: Vec<ElT>, shape: &[usize]) -> Result<Self, TensorError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
            strides: compute_strides(shape),
        })
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of stored elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    #[inline]
    pub fn data(&self) -> &[ElT] {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [ElT] {
        &mut self.data
    }

    /// Consume the tensor and return its column-major buffer.
    pub fn into_data(self) -> Vec<ElT> {
        self.data
    }

    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&ElT> {
        self.data.get(i)
    }

    /// Element at a cartesian index, or `None` if the index is invalid.
    pub fn get(&self, indices: &[usize]) -> Option<&ElT> {
        self.check_indices(indices).ok()?;
        self.data.get(cartesian_to_linear(indices, &self.strides))
    }

    pub fn get_mut(&mut self, indices: &[usize]) -> Option<&mut ElT> {
        self.check_indices(indices).ok()?;
        let linear = cartesian_to_linear(indices, &self.strides);
        self.data.get_mut(linear)
    }

    /// Set the element at a cartesian index.
    pub fn set(&mut self, indices: &[usize], value: ElT) -> Result<(), TensorError> {
        self.check_indices(indices)?;
        let linear = cartesian_to_linear(indices, &self.strides);
        self.data[linear] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: ElT) {
        self.data.iter_mut().for_each(|x| *x = value);
    }

    /// Reinterpret the column-major buffer with a new shape.
    ///
    /// # Example
    ///
    /// ```
    /// use tndecomp::Tensor;
    ///
    /// let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let m = t.reshape(&[3, 2]).unwrap();
    /// assert_eq!(m.shape(), &[3, 2]);
    /// assert_eq!(m.data(), t.data());
    /// ```
    pub fn reshape(&self, new_shape: &[usize]) -> Result<Self, TensorError> {
        self.clone().into_shape(new_shape)
    }

    /// Owned variant of [`Tensor::reshape`].
    pub fn into_shape(self, new_shape: &[usize]) -> Result<Self, TensorError> {
        Self::from_vec(self.data, new_shape)
    }

    fn check_indices(&self, indices: &[usize]) -> Result<(), TensorError> {
        if indices.len() != self.ndim() {
            return Err(TensorError::WrongNumberOfIndices {
                expected: self.ndim(),
                actual: indices.len(),
            });
        }
        for (&index, &dim_size) in indices.iter().zip(self.shape.iter()) {
            if index >= dim_size {
                return Err(TensorError::IndexOutOfBounds { index, dim_size });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;

    fn test_zeros_generic<T: Scalar>() {
        let t: Tensor<T> = Tensor::zeros(&[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.ndim(), 2);
        assert_eq!(t.len(), 6);
        assert_eq!(t.strides(), &[1, 2]);
        assert!(t.data().iter().all(|&x| x == T::zero()));
    }

    #[test]
    fn test_zeros_f64() {
        test_zeros_generic::<f64>();
    }

    #[test]
    fn test_zeros_c64() {
        test_zeros_generic::<c64>();
    }

    #[test]
    fn test_from_vec_column_major() {
        let t: DenseTensor<f64> =
            Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        assert_eq!(t.get(&[0, 0]), Some(&1.0));
        assert_eq!(t.get(&[1, 0]), Some(&2.0));
        assert_eq!(t.get(&[0, 1]), Some(&3.0));
        assert_eq!(t.get(&[1, 2]), Some(&6.0));
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let result = Tensor::<f64>::from_vec(vec![1.0, 2.0, 3.0], &[2, 3]);
        assert!(matches!(
            result,
            Err(TensorError::ShapeMismatch {
                expected: 6,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_scalar_tensor() {
        let t: Tensor<f64> = Tensor::zeros(&[]);
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(&[]), Some(&0.0));
    }

    #[test]
    fn test_zero_sized_axis() {
        let t: Tensor<f64> = Tensor::zeros(&[0, 3]);
        assert!(t.is_empty());
        assert_eq!(t.get(&[0, 0]), None);
        assert!(Tensor::<f64>::from_vec(vec![], &[3, 0]).is_ok());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let t: Tensor<f64> = Tensor::zeros(&[2, 3]);
        assert_eq!(t.get(&[2, 0]), None);
        assert_eq!(t.get(&[0, 3]), None);
        assert_eq!(t.get(&[0]), None);
    }

    #[test]
    fn test_set() {
        let mut t: Tensor<f64> = Tensor::zeros(&[2, 3]);
        t.set(&[1, 2], 42.0).unwrap();
        assert_eq!(t.get(&[1, 2]), Some(&42.0));
        assert_eq!(t.data()[5], 42.0);

        assert!(matches!(
            t.set(&[2, 0], 1.0),
            Err(TensorError::IndexOutOfBounds {
                index: 2,
                dim_size: 2
            })
        ));
        assert!(matches!(
            t.set(&[0], 1.0),
            Err(TensorError::WrongNumberOfIndices {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_get_mut() {
        let mut t: Tensor<f64> = Tensor::ones(&[2, 2]);
        *t.get_mut(&[1, 1]).unwrap() = 7.0;
        assert_eq!(t.data(), &[1.0, 1.0, 1.0, 7.0]);
    }

    #[test]
    fn test_reshape() {
        let t = Tensor::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();

        let t1d = t.reshape(&[6]).unwrap();
        assert_eq!(t1d.shape(), &[6]);
        assert_eq!(t1d.data(), t.data());

        let t3d = t.reshape(&[2, 1, 3]).unwrap();
        assert_eq!(t3d.get(&[1, 0, 2]), t.get(&[1, 2]));

        assert!(t.reshape(&[5]).is_err());
        assert!(t.reshape(&[2, 2]).is_err());
    }
}
