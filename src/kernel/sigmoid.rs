//! Sigmoid kernel
use super::{check_finite, dot, Kernel};
use crate::{Float, Result};
use serde::{Deserialize, Serialize};

/// Sigmoid kernel `tanh(γ x · sv + coef0)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "F: Float + Deserialize<'de>"))]
pub struct Sigmoid<F> {
    /// Constant added to the scaled inner product
    pub coef0: F,
    /// Scaling of the inner product
    pub gamma: F,
}

impl<F: Float> Sigmoid<F> {
    /// Creates the kernel with `coef0 = 0` and `gamma = 1`.
    pub fn new() -> Self {
        Sigmoid {
            coef0: F::zero(),
            gamma: F::one(),
        }
    }

    /// Sets the additive constant.
    pub fn with_coef0(mut self, coef0: F) -> Self {
        self.coef0 = coef0;
        self
    }

    /// Sets the scaling of the inner product.
    pub fn with_gamma(mut self, gamma: F) -> Self {
        self.gamma = gamma;
        self
    }
}

impl<F: Float> Default for Sigmoid<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Kernel<F> for Sigmoid<F> {
    fn compute(&self, x: &[F], sv: &[F]) -> F {
        (self.gamma * dot(x, sv) + self.coef0).tanh()
    }

    fn check(&self) -> Result<()> {
        check_finite("coef0", self.coef0)?;
        check_finite("gamma", self.gamma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn saturates() {
        let k = Sigmoid::new().with_gamma(100.0f64);
        assert_abs_diff_eq!(k.compute(&[1.0], &[1.0]), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(k.compute(&[1.0], &[-1.0]), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn shifted() {
        let k = Sigmoid::new().with_coef0(-1.0f64).with_gamma(0.5);
        assert_abs_diff_eq!(k.compute(&[2.0], &[1.0]), 0.0);
    }
}
