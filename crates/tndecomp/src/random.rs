//! Random tensor construction.
//!
//! Besides plain uniform and Gaussian tensors this provides Haar-random
//! isometries, which are the usual way to build test matrices with a
//! prescribed spectrum: `U1 · diag(s) · U2^H`.

use faer_traits::math_utils::conj;
use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::backend::collect_column_major;
use crate::decomposition::qr_decomposition;
use crate::scalar::{Scalar, c64};
use crate::tensor::{DenseTensor, Tensor};

/// Trait for types that can be randomly sampled from a uniform distribution.
pub trait RandomUniform: Scalar {
    /// Sample a random value from the uniform distribution [0, 1).
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for c64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        c64::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
    }
}

/// Trait for types that can be randomly sampled from a normal distribution.
pub trait RandomNormal: Scalar {
    /// Sample a random value from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for c64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        // real and imaginary parts are N(0, 1/2) so that E|z|^2 = 1
        let scale = std::f64::consts::FRAC_1_SQRT_2;
        c64::new(
            rng.sample::<f64, _>(StandardNormal) * scale,
            rng.sample::<f64, _>(StandardNormal) * scale,
        )
    }
}

impl<ElT: RandomUniform> Tensor<ElT> {
    /// Create a tensor with uniform random values in [0, 1).
    pub fn random(shape: &[usize]) -> Self {
        Self::random_with_rng(shape, &mut rand::rng())
    }

    /// Create a tensor with uniform random values using a specific RNG.
    ///
    /// ```
    /// use tndecomp::Tensor;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let t1: Tensor<f64> = Tensor::random_with_rng(&[2, 3], &mut StdRng::seed_from_u64(42));
    /// let t2: Tensor<f64> = Tensor::random_with_rng(&[2, 3], &mut StdRng::seed_from_u64(42));
    /// assert_eq!(t1.data(), t2.data());
    /// ```
    pub fn random_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len: usize = shape.iter().product();
        let data: Vec<ElT> = (0..len).map(|_| ElT::sample_uniform(rng)).collect();
        Self::from_vec(data, shape).expect("shape and data length should match")
    }
}

impl<ElT: RandomNormal> Tensor<ElT> {
    /// Create a tensor with standard normal random values.
    pub fn randn(shape: &[usize]) -> Self {
        Self::randn_with_rng(shape, &mut rand::rng())
    }

    /// Create a tensor with standard normal random values using a specific RNG.
    pub fn randn_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len: usize = shape.iter().product();
        let data: Vec<ElT> = (0..len).map(|_| ElT::sample_normal(rng)).collect();
        Self::from_vec(data, shape).expect("shape and data length should match")
    }
}

/// Haar-random `n x m` real matrix with orthonormal columns (`n >= m`) or
/// orthonormal rows (`n < m`).
///
/// ```
/// use tndecomp::random::random_orthog;
///
/// let o = random_orthog(10, 4);
/// assert_eq!(o.shape(), &[10, 4]);
/// ```
pub fn random_orthog(n: usize, m: usize) -> DenseTensor<f64> {
    random_orthog_with_rng(n, m, &mut rand::rng())
}

pub fn random_orthog_with_rng<R: Rng>(n: usize, m: usize, rng: &mut R) -> DenseTensor<f64> {
    random_isometry(n, m, rng)
}

/// Complex counterpart of [`random_orthog`].
pub fn random_unitary(n: usize, m: usize) -> DenseTensor<c64> {
    random_unitary_with_rng(n, m, &mut rand::rng())
}

pub fn random_unitary_with_rng<R: Rng>(n: usize, m: usize, rng: &mut R) -> DenseTensor<c64> {
    random_isometry(n, m, rng)
}

fn random_isometry<ElT: RandomNormal, R: Rng>(n: usize, m: usize, rng: &mut R) -> DenseTensor<ElT> {
    if n < m {
        let tall: DenseTensor<ElT> = random_isometry(m, n, rng);
        let data = tall.data();
        let wide = collect_column_major(n, m, |i, j| conj(&data[j + i * m]));
        return Tensor::from_vec(wide, &[n, m]).expect("shape and data length should match");
    }

    let gaussian: DenseTensor<ElT> = Tensor::randn_with_rng(&[n, m], rng);
    let split = qr_decomposition(&gaussian, 1).expect("Gaussian matrices are finite");

    // Fold the phase of diag(R) into Q so the distribution is Haar
    let mut q = split.q;
    for j in 0..split.rank {
        let phase = split.r.data()[j + j * split.rank].phase();
        for x in &mut q.data_mut()[j * n..(j + 1) * n] {
            *x = *x * phase;
        }
    }
    q
}
