//! tndecomp - tensor splits for tensor-network codes
//!
//! A dense tensor is split at a pivot axis: the axes before the pivot are
//! flattened into matrix rows, the remaining axes into columns, the matrix
//! is decomposed with faer, and the factors are reshaped back so that each
//! keeps its original axes plus one new bond axis.
//!
//! ```text
//! tensor [d0, .., dp-1 | dp, .., dn-1]
//!     → matricize at pivot p          (L = d0*..*dp-1, R = dp*..*dn-1)
//!     → faer SVD / QR                 (backend module)
//!     → truncate (SVD only)           (decomposition::truncation)
//!     → [d0, .., dp-1, k] and [k, dp, .., dn-1]
//! ```
//!
//! # Example
//!
//! ```
//! use tndecomp::{DenseTensor, Tensor};
//! use tndecomp::decomposition::{TruncationParams, svd_decomposition};
//!
//! let t: DenseTensor<f64> = Tensor::ones(&[2, 3, 4, 5]);
//! let params = TruncationParams::default().with_max_singular_values(3);
//! let result = svd_decomposition(&t, 2, &params).unwrap();
//!
//! assert_eq!(result.u.shape(), &[2, 3, 3]);
//! assert_eq!(result.s.shape(), &[3]);
//! assert_eq!(result.vh.shape(), &[3, 4, 5]);
//! ```

pub mod backend;
pub mod decomposition;
pub mod error;
pub mod operations;
pub mod random;
pub mod scalar;
pub mod strides;
pub mod tensor;

pub use error::TensorError;
pub use scalar::{Scalar, c64};
pub use tensor::{DenseTensor, Tensor};
