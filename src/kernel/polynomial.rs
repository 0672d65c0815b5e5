//! Polynomial kernel
use super::{check_finite, dot, Kernel};
use crate::{Float, Result};
use serde::{Deserialize, Serialize};

/// Polynomial kernel `(γ x · sv + coef0)^degree`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "F: Float + Deserialize<'de>"))]
pub struct Polynomial<F> {
    /// Integer exponent
    pub degree: i32,
    /// Constant added to the scaled inner product
    pub coef0: F,
    /// Scaling of the inner product
    pub gamma: F,
}

impl<F: Float> Polynomial<F> {
    const DEFAULT_DEGREE: i32 = 3;

    /// Creates the kernel with `degree = 3`, `coef0 = 0` and `gamma = 1`.
    pub fn new() -> Self {
        Polynomial {
            degree: Self::DEFAULT_DEGREE,
            coef0: F::zero(),
            gamma: F::one(),
        }
    }

    /// Sets the exponent.
    pub fn with_degree(mut self, degree: i32) -> Self {
        self.degree = degree;
        self
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

impl<F: Float> Default for Polynomial<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Kernel<F> for Polynomial<F> {
    fn compute(&self, x: &[F], sv: &[F]) -> F {
        (self.gamma * dot(x, sv) + self.coef0).powi(self.degree)
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
    fn defaults() {
        let k = Polynomial::<f64>::new();
        assert_eq!(k.degree, 3);
        assert_eq!(k.coef0, 0.0);
        assert_eq!(k.gamma, 1.0);
        // (1·2 + 0)³
        assert_abs_diff_eq!(k.compute(&[1.0, 1.0], &[1.0, 1.0]), 8.0);
    }

    #[test]
    fn scaled_and_shifted() {
        let k = Polynomial::new()
            .with_degree(2)
            .with_coef0(1.0f32)
            .with_gamma(0.5);
        // (0.5·4 + 1)² = 9
        assert_abs_diff_eq!(k.compute(&[1.0, 0.0, 0.0], &[4.0, 5.0, 6.0]), 9.0);
    }

    #[test]
    fn non_finite_parameters() {
        let k = Polynomial::new().with_gamma(f64::NAN);
        assert!(k.check().is_err());
        assert!(Polynomial::<f64>::new().check().is_ok());
    }
}
