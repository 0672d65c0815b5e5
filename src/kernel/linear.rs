//! Linear kernel
use super::{dot, Kernel};
use crate::Float;
use serde::{Deserialize, Serialize};

/// Plain inner product `x · sv`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Linear;

impl<F: Float> Kernel<F> for Linear {
    fn compute(&self, x: &[F], sv: &[F]) -> F {
        dot(x, sv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_product() {
        let value: f32 = Kernel::<f32>::compute(&Linear, &[1.0, -1.0], &[3.0, 2.0]);
        assert_eq!(value, 1.0);
    }
}
