//! Error types of the checked code paths
use thiserror::Error;

use ndarray::ShapeError;

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, SvmError>;

/// Errors reported by validation, checked prediction and model files
#[derive(Error, Debug)]
pub enum SvmError {
    /// Number of dual coefficients differs from the number of support vectors
    #[error("expected {expected} dual coefficients, found {found}")]
    DualCoefficients {
        /// Declared number of support vectors
        expected: usize,
        /// Length of the coefficient slice
        found: usize,
    },
    /// Support vector storage does not hold `nb_of_support_vectors × vector_dimension` values
    #[error("expected {expected} support vector values, found {found}")]
    SupportVectors {
        /// Declared matrix size
        expected: usize,
        /// Length of the support vector slice
        found: usize,
    },
    /// The declared matrix size does not fit into `usize`
    #[error("{nb_of_support_vectors} support vectors of dimension {vector_dimension} overflow usize")]
    DimensionOverflow {
        /// Declared number of support vectors
        nb_of_support_vectors: usize,
        /// Declared vector dimension
        vector_dimension: usize,
    },
    /// Both class labels are the same
    #[error("both class labels are {0}")]
    IdenticalClasses(i32),
    /// Sample length differs from the vector dimension
    #[error("expected input of dimension {expected}, found {found}")]
    InputDimension {
        /// Vector dimension of the instance
        expected: usize,
        /// Length of the sample
        found: usize,
    },
    /// Kernel parameter is not usable
    #[error("invalid kernel parameter {0}")]
    InvalidKernel(String),
    /// Support vectors could not be viewed as a matrix
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
    /// Model file could not be read or written
    #[error("invalid model file {0}")]
    Json(#[from] serde_json::Error),
}
