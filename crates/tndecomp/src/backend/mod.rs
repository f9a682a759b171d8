//! Bridge between tensors and the faer dense linear-algebra backend.
//!
//! Tensors and faer matrices share the column-major layout, so a tensor
//! matricized at a pivot axis is handed to faer as a borrowed view without
//! copying. Results come back through [`collect_column_major`], which copies
//! whichever window of a factor is kept.

mod faer_interop;

pub use faer_interop::{AsFaerMat, collect_column_major, tensor_from_faer_mat};
