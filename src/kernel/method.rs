//! Kernel chosen at runtime
use super::{Kernel, Linear, Polynomial, Rbf, Sigmoid};
use crate::{Float, Result};
use serde::{Deserialize, Serialize};

/// One of the supported kernels, selected when a model is loaded.
///
/// Serialized with an internal `kind` tag, e.g. `{"kind": "rbf", "gamma": 0.1}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "lowercase",
    bound(deserialize = "F: Float + Deserialize<'de>")
)]
pub enum KernelMethod<F> {
    /// Inner product
    Linear,
    /// Polynomial of the inner product
    Polynomial(Polynomial<F>),
    /// Gaussian radial basis function
    Rbf(Rbf<F>),
    /// Hyperbolic tangent of the inner product
    Sigmoid(Sigmoid<F>),
}

impl<F> KernelMethod<F> {
    /// Whether the kernel is the plain inner product
    pub fn is_linear(&self) -> bool {
        matches!(self, KernelMethod::Linear)
    }
}

impl<F> Default for KernelMethod<F> {
    fn default() -> Self {
        KernelMethod::Linear
    }
}

impl<F> From<Linear> for KernelMethod<F> {
    fn from(_: Linear) -> Self {
        KernelMethod::Linear
    }
}

impl<F> From<Polynomial<F>> for KernelMethod<F> {
    fn from(kernel: Polynomial<F>) -> Self {
        KernelMethod::Polynomial(kernel)
    }
}

impl<F> From<Rbf<F>> for KernelMethod<F> {
    fn from(kernel: Rbf<F>) -> Self {
        KernelMethod::Rbf(kernel)
    }
}

impl<F> From<Sigmoid<F>> for KernelMethod<F> {
    fn from(kernel: Sigmoid<F>) -> Self {
        KernelMethod::Sigmoid(kernel)
    }
}

impl<F: Float> Kernel<F> for KernelMethod<F> {
    fn compute(&self, x: &[F], sv: &[F]) -> F {
        match self {
            KernelMethod::Linear => Kernel::<F>::compute(&Linear, x, sv),
            KernelMethod::Polynomial(k) => k.compute(x, sv),
            KernelMethod::Rbf(k) => k.compute(x, sv),
            KernelMethod::Sigmoid(k) => k.compute(x, sv),
        }
    }

    fn check(&self) -> Result<()> {
        match self {
            KernelMethod::Linear => Ok(()),
            KernelMethod::Polynomial(k) => k.check(),
            KernelMethod::Rbf(k) => k.check(),
            KernelMethod::Sigmoid(k) => k.check(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dispatches_to_kernel() {
        let x = [1.0f64, 0.0, 0.0];
        let sv = [4.0, 5.0, 6.0];
        let poly = Polynomial::new().with_degree(2).with_coef0(1.0).with_gamma(0.5);
        let method = KernelMethod::from(poly);
        assert_abs_diff_eq!(method.compute(&x, &sv), poly.compute(&x, &sv));
        assert_abs_diff_eq!(KernelMethod::Linear.compute(&x, &sv), 4.0);
        assert!(KernelMethod::<f64>::default().is_linear());
        assert!(!method.is_linear());
    }

    #[test]
    fn tagged_json() {
        let method: KernelMethod<f64> =
            serde_json::from_str(r#"{"kind": "rbf", "gamma": 0.25}"#).unwrap();
        assert_eq!(method, KernelMethod::Rbf(Rbf::new().with_gamma(0.25)));

        let method: KernelMethod<f32> = serde_json::from_str(r#"{"kind": "linear"}"#).unwrap();
        assert!(method.is_linear());

        // missing parameters fall back to the defaults
        let method: KernelMethod<f64> =
            serde_json::from_str(r#"{"kind": "polynomial", "degree": 2}"#).unwrap();
        assert_eq!(
            method,
            KernelMethod::Polynomial(Polynomial::new().with_degree(2))
        );
    }

    #[test]
    fn checks_parameters() {
        let method = KernelMethod::from(Sigmoid::new().with_coef0(f64::INFINITY));
        assert!(method.check().is_err());
        assert!(KernelMethod::<f32>::Linear.check().is_ok());
    }
}
