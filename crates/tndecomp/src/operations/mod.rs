//! Operations for recombining the factors of a split.

mod bond;
mod norm;

pub use bond::{contract_bond, scale_bond};
pub use norm::{norm, norm_sqr};
