//! Error types for tndecomp.

use thiserror::Error;

/// Errors that can occur while building or decomposing tensors.
#[derive(Debug, Error)]
pub enum TensorError {
    /// Data length does not match the product of the shape.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Index out of bounds.
    #[error("index out of bounds: index {index} is out of range for dimension {dim_size}")]
    IndexOutOfBounds { index: usize, dim_size: usize },

    /// Wrong number of indices provided.
    #[error("wrong number of indices: expected {expected}, got {actual}")]
    WrongNumberOfIndices { expected: usize, actual: usize },

    /// Pivot axis outside `[0, ndim]`.
    #[error("pivot axis {pivot} out of range for tensor with {ndim} dimensions")]
    InvalidPivot { pivot: usize, ndim: usize },

    /// Truncation bound that cannot be honoured.
    #[error("invalid truncation parameters: {message}")]
    InvalidTruncation { message: String },

    /// Bond dimensions of two tensors do not agree.
    #[error("bond dimension mismatch: left has {left}, right has {right}")]
    BondMismatch { left: usize, right: usize },

    /// Rank-0 tensors have no axis to contract or scale.
    #[error("tensor of rank 0 has no bond axis")]
    NoBondAxis,

    /// The dense linear-algebra backend failed.
    #[error("{routine} failed: {message}")]
    ComputationFailure {
        routine: &'static str,
        message: String,
    },
}

impl TensorError {
    /// True for errors caused by the arguments of a call, detected before
    /// any numerical work is done.
    pub fn is_invalid_argument(&self) -> bool {
        !self.is_computation_failure()
    }

    /// True for failures reported by the numerical backend.
    pub fn is_computation_failure(&self) -> bool {
        matches!(self, TensorError::ComputationFailure { .. })
    }
}
