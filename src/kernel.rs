//! Kernel functions
pub mod linear;
pub mod method;
pub mod polynomial;
pub mod rbf;
pub mod sigmoid;

pub use linear::Linear;
pub use method::KernelMethod;
pub use polynomial::Polynomial;
pub use rbf::Rbf;
pub use sigmoid::Sigmoid;

use crate::{Float, Result, SvmError};

/// A kernel function comparing a sample with a single support vector.
pub trait Kernel<F: Float> {
    /// Evaluates the kernel for sample `x` and support vector `sv` of equal length.
    fn compute(&self, x: &[F], sv: &[F]) -> F;

    /// Checks whether the kernel parameters can be used for prediction.
    fn check(&self) -> Result<()> {
        Ok(())
    }
}

/// Computes the inner product of two vectors.
pub fn dot<F: Float>(x: &[F], sv: &[F]) -> F {
    x.iter()
        .zip(sv.iter())
        .fold(F::zero(), |acc, (&xk, &svk)| acc + xk * svk)
}

pub(crate) fn check_finite<F: Float>(name: &str, value: F) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SvmError::InvalidKernel(format!("{} = {}", name, value)))
    }
}
