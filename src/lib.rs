//! Evaluate trained binary SVM classifiers.
//!
//! An [`SvmInstance`] borrows the parameters of a trained support vector machine (support
//! vectors, dual coefficients, intercept and the two class labels) and evaluates its decision
//! function without copying them. This suits models that live in static tables or in
//! caller-managed buffers. Owned models can be loaded from JSON files through [`SvmModel`].
//!
//! ```
//! use rusvm_predict::SvmLinearInstance;
//!
//! let dual_coefficients = [1.0f32, -1.0];
//! let support_vectors = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let classes = [0, 1];
//! let svm = SvmLinearInstance::new(2, 3, 0.5, &dual_coefficients, &support_vectors, &classes);
//!
//! assert_eq!(svm.predict(&[1.0, 1.0, 1.0]), 0);
//! assert_eq!(svm.predict(&[-1.0, -1.0, -1.0]), 1);
//! ```
//!
//! Only two classes are supported. Multi-class classifiers have to be composed from several
//! binary instances.
#![warn(missing_docs)]

use ndarray::NdFloat;

mod error;
pub mod instance;
pub mod kernel;
pub mod model;
mod predict;

pub use crate::error::{Result, SvmError};
pub use crate::instance::{
    SvmInstance, SvmLinearInstance, SvmPolynomialInstance, SvmRbfInstance, SvmSigmoidInstance,
};
pub use crate::kernel::{Kernel, KernelMethod, Linear, Polynomial, Rbf, Sigmoid};
pub use crate::model::SvmModel;

/// Floating point types the predictors are implemented for
pub trait Float: NdFloat + Default + std::iter::Sum {}

impl Float for f32 {}
impl Float for f64 {}
