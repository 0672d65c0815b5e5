//! Gaussian (RBF) kernel
use super::{check_finite, Kernel};
use crate::{Float, Result};
use serde::{Deserialize, Serialize};

/// Computes simple Gaussian kernel function.
pub fn kernel<F: Float>(x: &[F], sv: &[F], gamma: F) -> F {
    let dij = x
        .iter()
        .zip(sv.iter())
        .fold(F::zero(), |acc, (&xk, &svk)| acc + (xk - svk).powi(2));
    (-gamma * dij).exp()
}

/// Gaussian kernel `exp(-γ ‖x - sv‖²)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "F: Float + Deserialize<'de>"))]
pub struct Rbf<F> {
    /// Width parameter γ
    pub gamma: F,
}

impl<F: Float> Rbf<F> {
    /// Creates the kernel with `gamma = 1`.
    pub fn new() -> Self {
        Rbf { gamma: F::one() }
    }

    /// Sets the width parameter.
    pub fn with_gamma(mut self, gamma: F) -> Self {
        self.gamma = gamma;
        self
    }
}

impl<F: Float> Default for Rbf<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Kernel<F> for Rbf<F> {
    fn compute(&self, x: &[F], sv: &[F]) -> F {
        kernel(x, sv, self.gamma)
    }

    fn check(&self) -> Result<()> {
        check_finite("gamma", self.gamma)
    }
}
