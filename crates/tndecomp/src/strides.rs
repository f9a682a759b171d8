//! Column-major stride arithmetic.
//!
//! The first axis varies fastest, which is also faer's native layout. This
//! is what makes matricization at a pivot axis free: the flat buffer of a
//! tensor already is the column-major `L x R` matrix.

/// Compute column-major strides from shape.
///
/// # Examples
///
/// ```
/// use tndecomp::strides::compute_strides;
///
/// assert_eq!(compute_strides(&[3, 4, 5]), vec![1, 3, 12]);
/// assert_eq!(compute_strides(&[5]), vec![1]);
/// assert_eq!(compute_strides(&[]), Vec::<usize>::new());
/// ```
pub fn compute_strides(shape: &[usize]) -> Vec<usize> {
    shape
        .iter()
        .scan(1usize, |stride, &dim| {
            let current = *stride;
            *stride *= dim;
            Some(current)
        })
        .collect()
}

/// Linear offset of a cartesian index.
#[inline]
pub fn cartesian_to_linear(indices: &[usize], strides: &[usize]) -> usize {
    indices
        .iter()
        .zip(strides.iter())
        .map(|(&idx, &stride)| idx * stride)
        .sum()
}
