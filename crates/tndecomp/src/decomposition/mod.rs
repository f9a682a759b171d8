//! Splitting tensors at a pivot axis.
//!
//! Every decomposition here follows the same steps:
//! 1. Matricize at the pivot: axes `[0, pivot)` are rows, the rest columns.
//!    With column-major storage this is a reinterpretation of the buffer.
//! 2. Hand the matrix to faer.
//! 3. Optionally drop the smallest singular values (SVD only).
//! 4. Reshape the factors to `[left axes..., k]` and `[k, right axes...]`.
//!
//! # Available Decompositions
//!
//! - [`svd_decomposition`] / [`svd`]: truncated Singular Value Decomposition
//! - [`qr_decomposition`]: QR, left factor orthonormal
//! - [`rq_decomposition`]: RQ, right factor orthonormal
//!
//! # Example
//!
//! ```
//! use tndecomp::Tensor;
//! use tndecomp::decomposition::{qr_decomposition, rq_decomposition};
//!
//! let t = Tensor::<f64>::ones(&[2, 3, 4]);
//!
//! let qr = qr_decomposition(&t, 2).unwrap();
//! assert_eq!(qr.q.shape(), &[2, 3, 4]);
//! assert_eq!(qr.r.shape(), &[4, 4]);
//!
//! let rq = rq_decomposition(&t, 1).unwrap();
//! assert_eq!(rq.r.shape(), &[2, 2]);
//! assert_eq!(rq.q.shape(), &[2, 3, 4]);
//! ```

mod qr;
mod rq;
mod svd;
mod truncation;
mod util;

pub use qr::{QrResult, qr_decomposition};
pub use rq::{RqResult, rq_decomposition};
pub use svd::{SvdResult, svd, svd_decomposition};
pub use truncation::{TruncationParams, retained_count};
pub use util::{Matricized, matricize};
