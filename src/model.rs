//! Owned model description and JSON model files
//!
//! A model file looks like
//!
//! ```json
//! {
//!     "vector_dimension": 2,
//!     "intercept": -0.5,
//!     "dual_coefficients": [0.5, -0.5],
//!     "support_vectors": [1.0, 1.0, -1.0, -1.0],
//!     "classes": [0, 1],
//!     "kernel": { "kind": "rbf", "gamma": 0.5 }
//! }
//! ```
//!
//! The kernel may be omitted for a linear model. Missing kernel parameters take the defaults
//! of the kernel builders.
use std::io::Read;

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::kernel::KernelMethod;
use crate::{Float, Result, SvmInstance};

/// Parameters of a trained binary SVM classifier, owned
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "F: Float + Deserialize<'de>"))]
pub struct SvmModel<F> {
    /// Dimension of the vector space
    pub vector_dimension: usize,
    /// Offset (bias) of the decision function
    pub intercept: F,
    /// One coefficient per support vector
    pub dual_coefficients: Vec<F>,
    /// Support vectors stored row by row
    pub support_vectors: Vec<F>,
    /// Labels returned for a non-positive and a positive decision value
    pub classes: [i32; 2],
    /// Kernel function and its parameters
    #[serde(default)]
    pub kernel: KernelMethod<F>,
}

impl<F: Float> SvmModel<F> {
    /// Creates a [`SvmModel`] struct.
    ///
    /// * `vector_dimension`: dimension of the vector space
    /// * `intercept`: offset of the decision function
    /// * `dual_coefficients`: one coefficient per support vector
    /// * `support_vectors`: support vectors stored row by row
    /// * `classes`: labels of the two classes
    /// * `kernel`: kernel function
    pub fn new(
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: Vec<F>,
        support_vectors: Vec<F>,
        classes: [i32; 2],
        kernel: impl Into<KernelMethod<F>>,
    ) -> Self {
        SvmModel {
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            kernel: kernel.into(),
        }
    }

    /// Returns the number of support vectors.
    pub fn nb_of_support_vectors(&self) -> usize {
        self.dual_coefficients.len()
    }

    /// Borrows the model as a validated [`SvmInstance`].
    pub fn instance(&self) -> Result<SvmInstance<'_, F, KernelMethod<F>>> {
        SvmInstance::with_kernel(
            self.nb_of_support_vectors(),
            self.vector_dimension,
            self.intercept,
            &self.dual_coefficients,
            &self.support_vectors,
            &self.classes,
            self.kernel,
        )
        .validated()
    }

    /// Checks the model with the same rules as [`SvmInstance::validate`].
    pub fn validate(&self) -> Result<()> {
        self.instance().map(|_| ())
    }

    /// Removes support vectors with a zero dual coefficient.
    pub fn prune(&self) -> Result<SvmModel<F>> {
        let svm = self.instance()?;
        let size_support = self
            .dual_coefficients
            .iter()
            .filter(|&&ai| ai != F::zero())
            .count();
        let mut dual_coefficients = Vec::with_capacity(size_support);
        let mut support_vectors = Vec::with_capacity(size_support * self.vector_dimension);
        for (i, &ai) in self.dual_coefficients.iter().enumerate() {
            if ai != F::zero() {
                dual_coefficients.push(ai);
                support_vectors.extend_from_slice(svm.support_vector(i));
            }
        }
        debug!(
            "pruned SVM model from {} to {} support vectors",
            self.nb_of_support_vectors(),
            size_support
        );
        Ok(SvmModel {
            vector_dimension: self.vector_dimension,
            intercept: self.intercept,
            dual_coefficients,
            support_vectors,
            classes: self.classes,
            kernel: self.kernel,
        })
    }

    /// Parses and validates a model from a JSON string.
    pub fn from_json(json: &str) -> Result<Self>
    where
        F: DeserializeOwned,
    {
        let model: SvmModel<F> = serde_json::from_str(json)?;
        model.loaded()
    }

    /// Reads and validates a model from a JSON document.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self>
    where
        F: DeserializeOwned,
    {
        let model: SvmModel<F> = serde_json::from_reader(reader)?;
        model.loaded()
    }

    /// Serializes the model to a JSON string.
    pub fn to_json(&self) -> Result<String>
    where
        F: Serialize,
    {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn loaded(self) -> Result<Self> {
        self.validate()?;
        debug!(
            "loaded SVM model with {} support vectors of dimension {} ({:?} kernel)",
            self.nb_of_support_vectors(),
            self.vector_dimension,
            self.kernel
        );
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rbf, SvmError};
    use approx::assert_abs_diff_eq;

    fn model() -> SvmModel<f64> {
        SvmModel::new(
            3,
            0.5,
            vec![1.0, 0.0, -1.0],
            vec![1.0, 2.0, 3.0, 9.0, 9.0, 9.0, 4.0, 5.0, 6.0],
            [0, 1],
            crate::Linear,
        )
    }

    #[test]
    fn borrowed_instance() {
        let model = model();
        let svm = model.instance().unwrap();
        assert_eq!(svm.nb_of_support_vectors, 3);
        assert_eq!(svm.vector_dimension, 3);
        assert!(std::ptr::eq(
            svm.support_vectors,
            model.support_vectors.as_slice()
        ));
        assert_abs_diff_eq!(svm.decision_function(&[1.0, 1.0, 1.0]), -8.5);
    }

    #[test]
    fn prune_keeps_decision() {
        let model = model();
        let pruned = model.prune().unwrap();
        assert_eq!(pruned.nb_of_support_vectors(), 2);
        assert_eq!(pruned.dual_coefficients, vec![1.0, -1.0]);
        assert_eq!(
            pruned.support_vectors,
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]
        );
        let x = [0.5, -2.0, 1.0];
        assert_abs_diff_eq!(
            pruned.instance().unwrap().decision_function(&x),
            model.instance().unwrap().decision_function(&x)
        );
    }

    #[test]
    fn json_round_trip() {
        let model = SvmModel::new(
            2,
            -0.5f64,
            vec![0.5, -0.5],
            vec![1.0, 1.0, -1.0, -1.0],
            [-1, 1],
            Rbf::new().with_gamma(0.5),
        );
        let json = model.to_json().unwrap();
        assert!(json.contains("\"kind\": \"rbf\""));
        let parsed = SvmModel::<f64>::from_json(&json).unwrap();
        assert_eq!(parsed, model);
    }

    #[test]
    fn kernel_defaults_to_linear() {
        let json = r#"{
            "vector_dimension": 1,
            "intercept": 0.0,
            "dual_coefficients": [1.0],
            "support_vectors": [2.0],
            "classes": [0, 1]
        }"#;
        let model = SvmModel::<f32>::from_json(json).unwrap();
        assert!(model.kernel.is_linear());
        assert_eq!(model.instance().unwrap().predict(&[1.0]), 1);
    }

    #[test]
    fn rejects_inconsistent_model() {
        let json = r#"{
            "vector_dimension": 2,
            "intercept": 0.0,
            "dual_coefficients": [1.0, 1.0],
            "support_vectors": [1.0, 2.0, 3.0],
            "classes": [0, 1]
        }"#;
        assert!(matches!(
            SvmModel::<f64>::from_json(json),
            Err(SvmError::SupportVectors {
                expected: 4,
                found: 3
            })
        ));
        assert!(matches!(
            SvmModel::<f64>::from_json("{"),
            Err(SvmError::Json(_))
        ));
    }
}
