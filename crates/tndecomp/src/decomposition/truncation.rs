//! Singular value truncation policy.

use crate::error::TensorError;

/// Bounds controlling how many singular values an SVD keeps.
///
/// The default keeps everything. Both bounds may be combined: the error
/// bound picks the smallest count whose discarded tail fits, the count
/// bound then caps it.
///
/// # Example
///
/// ```
/// use tndecomp::decomposition::TruncationParams;
///
/// let params = TruncationParams::default()
///     .with_max_singular_values(16)
///     .with_max_truncation_error(1e-3)
///     .with_relative(true);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TruncationParams {
    /// Upper bound on the number of kept singular values.
    pub max_singular_values: Option<usize>,
    /// Upper bound on the Euclidean norm of the discarded singular values.
    pub max_truncation_error: Option<f64>,
    /// Interpret `max_truncation_error` as a fraction of the largest
    /// singular value.
    pub relative: bool,
}

impl TruncationParams {
    pub fn with_max_singular_values(mut self, max_singular_values: usize) -> Self {
        self.max_singular_values = Some(max_singular_values);
        self
    }

    pub fn with_max_truncation_error(mut self, max_truncation_error: f64) -> Self {
        self.max_truncation_error = Some(max_truncation_error);
        self
    }

    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// True when no bound is set and every singular value is kept.
    pub fn is_unbounded(&self) -> bool {
        self.max_singular_values.is_none() && self.max_truncation_error.is_none()
    }

    /// Check the bounds before any numerical work is done.
    ///
    /// # Errors
    ///
    /// `TensorError::InvalidTruncation` if `max_singular_values` is zero or
    /// `max_truncation_error` is negative or NaN.
    pub fn validate(&self) -> Result<(), TensorError> {
        if self.max_singular_values == Some(0) {
            return Err(TensorError::InvalidTruncation {
                message: "max_singular_values must be at least 1".to_string(),
            });
        }
        if let Some(err) = self.max_truncation_error {
            if err.is_nan() || err < 0.0 {
                return Err(TensorError::InvalidTruncation {
                    message: format!("max_truncation_error must be non-negative, got {err}"),
                });
            }
        }
        Ok(())
    }
}

/// Number of singular values to keep from a descending spectrum.
///
/// Walks the spectrum from the smallest value upward, growing the
/// discarded tail while its norm stays within the threshold. A non-empty
/// spectrum always keeps its largest value, whatever the parameters; use
/// [`TruncationParams::validate`] to reject a zero cap up front.
///
/// ```
/// use tndecomp::decomposition::{TruncationParams, retained_count};
///
/// let s = [9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0];
/// let params = TruncationParams::default().with_max_truncation_error(5.1f64.sqrt());
/// assert_eq!(retained_count(&s, &params), 7);
/// ```
pub fn retained_count(singular_values: &[f64], params: &TruncationParams) -> usize {
    let n = singular_values.len();
    if n == 0 {
        return 0;
    }

    let mut keep = n;
    if let Some(max_error) = params.max_truncation_error {
        let threshold = if params.relative {
            max_error * singular_values[0]
        } else {
            max_error
        };

        let mut tail_energy = 0.0;
        let mut discard = 0;
        for &value in singular_values[1..].iter().rev() {
            tail_energy += value * value;
            if tail_energy.sqrt() > threshold {
                break;
            }
            discard += 1;
        }
        keep = n - discard;
    }

    if let Some(max_singular_values) = params.max_singular_values {
        keep = keep.min(max_singular_values.max(1));
    }
    keep
}
