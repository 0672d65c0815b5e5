use log::trace;
use ndarray::{Array1, ArrayView2};

use crate::kernel::Kernel;
use crate::{Float, Result, SvmError, SvmInstance};

/// Maps a decision value to the index of the predicted class.
fn step<F: Float>(value: F) -> usize {
    if value <= F::zero() {
        0
    } else {
        1
    }
}

impl<F: Float, K: Kernel<F>> SvmInstance<'_, F, K> {
    /// Evaluate the decision function for a particular sample.
    ///
    /// Computes `intercept + Σ dual_coefficients[i] · K(x, support_vector(i))`.
    ///
    /// # Panics
    ///
    /// If `x` is shorter than `vector_dimension` or the referenced parameters are shorter than
    /// the declared counts. Use [`try_decision_function`](Self::try_decision_function) for
    /// unchecked input.
    pub fn decision_function(&self, x: &[F]) -> F {
        let x = &x[..self.vector_dimension];
        let mut value = self.intercept;
        for (i, &ai) in self.dual_coefficients[..self.nb_of_support_vectors]
            .iter()
            .enumerate()
        {
            value += ai * self.kernel.compute(x, self.support_vector(i));
        }
        trace!("decision value {}", value);
        value
    }

    /// Predicts the class of a sample.
    ///
    /// Returns `classes[0]` for a non-positive decision value and `classes[1]` otherwise.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`decision_function`](Self::decision_function).
    pub fn predict(&self, x: &[F]) -> i32 {
        self.classes[step(self.decision_function(x))]
    }

    /// Validates instance and sample before evaluating the decision function.
    pub fn try_decision_function(&self, x: &[F]) -> Result<F> {
        self.validate()?;
        self.check_input(x.len())?;
        Ok(self.decision_function(x))
    }

    /// Validates instance and sample before predicting the class.
    pub fn try_predict(&self, x: &[F]) -> Result<i32> {
        let value = self.try_decision_function(x)?;
        Ok(self.classes[step(value)])
    }

    /// Evaluates the decision function for every row of `samples`.
    pub fn decision_batch(&self, samples: ArrayView2<'_, F>) -> Result<Array1<F>> {
        self.validate()?;
        self.check_input(samples.ncols())?;
        Ok(samples
            .outer_iter()
            .map(|row| match row.as_slice() {
                Some(x) => self.decision_function(x),
                None => self.decision_function(&row.to_vec()),
            })
            .collect())
    }

    /// Predicts the class of every row of `samples`.
    pub fn predict_batch(&self, samples: ArrayView2<'_, F>) -> Result<Array1<i32>> {
        let values = self.decision_batch(samples)?;
        Ok(values.mapv(|value| self.classes[step(value)]))
    }

    fn check_input(&self, found: usize) -> Result<()> {
        if found != self.vector_dimension {
            return Err(SvmError::InputDimension {
                expected: self.vector_dimension,
                found,
            });
        }
        Ok(())
    }
}
