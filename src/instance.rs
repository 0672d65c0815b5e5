//! Borrowed SVM instances
//!
//! An instance stores references to caller-owned model parameters. Nothing is copied and
//! nothing is checked when an instance is created or re-initialized. The borrows make sure
//! the parameters outlive the instance and stay unmodified while it is in use. Length
//! consistency is only checked on request, see [`SvmInstance::validate`].
use log::debug;
use ndarray::ArrayView2;

use crate::kernel::{Kernel, Linear, Polynomial, Rbf, Sigmoid};
use crate::{Float, Result, SvmError};

/// Parameters of a trained binary SVM classifier
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvmInstance<'a, F, K> {
    /// Number of support vectors
    pub nb_of_support_vectors: usize,
    /// Dimension of the vector space
    pub vector_dimension: usize,
    /// Offset (bias) of the decision function
    pub intercept: F,
    /// One coefficient per support vector
    pub dual_coefficients: &'a [F],
    /// Support vectors stored row by row (`nb_of_support_vectors × vector_dimension` values)
    pub support_vectors: &'a [F],
    /// Labels returned for a non-positive and a positive decision value
    pub classes: &'a [i32; 2],
    /// Kernel function and its parameters
    pub kernel: K,
}

/// Instance with a linear kernel
pub type SvmLinearInstance<'a, F> = SvmInstance<'a, F, Linear>;
/// Instance with a polynomial kernel
pub type SvmPolynomialInstance<'a, F> = SvmInstance<'a, F, Polynomial<F>>;
/// Instance with a Gaussian kernel
pub type SvmRbfInstance<'a, F> = SvmInstance<'a, F, Rbf<F>>;
/// Instance with a sigmoid kernel
pub type SvmSigmoidInstance<'a, F> = SvmInstance<'a, F, Sigmoid<F>>;

impl<F: Float, K: Default> Default for SvmInstance<'_, F, K> {
    fn default() -> Self {
        SvmInstance {
            nb_of_support_vectors: 0,
            vector_dimension: 0,
            intercept: F::zero(),
            dual_coefficients: &[],
            support_vectors: &[],
            classes: &[0, 0],
            kernel: K::default(),
        }
    }
}

impl<'a, F: Float, K: Kernel<F>> SvmInstance<'a, F, K> {
    /// Creates an instance for an arbitrary kernel.
    pub fn with_kernel(
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        kernel: K,
    ) -> Self {
        SvmInstance {
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            kernel,
        }
    }

    /// Overwrites every field of the instance.
    #[allow(clippy::too_many_arguments)]
    pub fn init_with_kernel(
        &mut self,
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        kernel: K,
    ) {
        self.nb_of_support_vectors = nb_of_support_vectors;
        self.vector_dimension = vector_dimension;
        self.intercept = intercept;
        self.dual_coefficients = dual_coefficients;
        self.support_vectors = support_vectors;
        self.classes = classes;
        self.kernel = kernel;
    }

    /// Returns the `i`th support vector.
    ///
    /// # Panics
    ///
    /// If the support vector storage is shorter than `(i + 1) * vector_dimension`.
    pub fn support_vector(&self, i: usize) -> &'a [F] {
        let dim = self.vector_dimension;
        &self.support_vectors[i * dim..(i + 1) * dim]
    }

    /// Views the support vectors as a `nb_of_support_vectors × vector_dimension` matrix.
    pub fn support_vectors_view(&self) -> Result<ArrayView2<'a, F>> {
        self.check_support_vectors()?;
        let view = ArrayView2::from_shape(
            (self.nb_of_support_vectors, self.vector_dimension),
            self.support_vectors,
        )?;
        Ok(view)
    }

    /// Checks the lengths of the referenced parameters, the class labels and the kernel.
    pub fn validate(&self) -> Result<()> {
        let res = self.check_parameters();
        if let Err(err) = &res {
            debug!("rejected SVM instance: {}", err);
        }
        res
    }

    /// Consumes the instance and returns it if [`validate`](Self::validate) succeeds.
    pub fn validated(self) -> Result<Self> {
        self.validate().map(|_| self)
    }

    fn check_parameters(&self) -> Result<()> {
        let nb = self.nb_of_support_vectors;
        if self.dual_coefficients.len() != nb {
            return Err(SvmError::DualCoefficients {
                expected: nb,
                found: self.dual_coefficients.len(),
            });
        }
        self.check_support_vectors()?;
        if self.classes[0] == self.classes[1] {
            return Err(SvmError::IdenticalClasses(self.classes[0]));
        }
        self.kernel.check()
    }

    fn check_support_vectors(&self) -> Result<()> {
        let nb = self.nb_of_support_vectors;
        let dim = self.vector_dimension;
        let size = nb.checked_mul(dim).ok_or(SvmError::DimensionOverflow {
            nb_of_support_vectors: nb,
            vector_dimension: dim,
        })?;
        if self.support_vectors.len() != size {
            return Err(SvmError::SupportVectors {
                expected: size,
                found: self.support_vectors.len(),
            });
        }
        Ok(())
    }
}

impl<'a, F: Float> SvmInstance<'a, F, Linear> {
    /// Creates a linear SVM instance.
    ///
    /// * `nb_of_support_vectors`: number of support vectors
    /// * `vector_dimension`: dimension of the vector space
    /// * `intercept`: offset of the decision function
    /// * `dual_coefficients`: one coefficient per support vector
    /// * `support_vectors`: support vectors stored row by row
    /// * `classes`: labels of the two classes
    pub fn new(
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
    ) -> Self {
        Self::with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            Linear,
        )
    }

    /// Initializes a linear SVM instance in place.
    pub fn init(
        &mut self,
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
    ) {
        self.init_with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            Linear,
        )
    }
}

impl<'a, F: Float> SvmInstance<'a, F, Polynomial<F>> {
    /// Creates a polynomial SVM instance with kernel `(gamma x · sv + coef0)^degree`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        degree: i32,
        coef0: F,
        gamma: F,
    ) -> Self {
        let kernel = Polynomial::new()
            .with_degree(degree)
            .with_coef0(coef0)
            .with_gamma(gamma);
        Self::with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            kernel,
        )
    }

    /// Initializes a polynomial SVM instance in place.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        degree: i32,
        coef0: F,
        gamma: F,
    ) {
        let kernel = Polynomial::new()
            .with_degree(degree)
            .with_coef0(coef0)
            .with_gamma(gamma);
        self.init_with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            kernel,
        )
    }
}

impl<'a, F: Float> SvmInstance<'a, F, Rbf<F>> {
    /// Creates a Gaussian SVM instance with kernel `exp(-gamma ‖x - sv‖²)`.
    pub fn new(
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        gamma: F,
    ) -> Self {
        Self::with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            Rbf::new().with_gamma(gamma),
        )
    }

    /// Initializes a Gaussian SVM instance in place.
    pub fn init(
        &mut self,
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        gamma: F,
    ) {
        self.init_with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            Rbf::new().with_gamma(gamma),
        )
    }
}

impl<'a, F: Float> SvmInstance<'a, F, Sigmoid<F>> {
    /// Creates a sigmoid SVM instance with kernel `tanh(gamma x · sv + coef0)`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        coef0: F,
        gamma: F,
    ) -> Self {
        Self::with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            Sigmoid::new().with_coef0(coef0).with_gamma(gamma),
        )
    }

    /// Initializes a sigmoid SVM instance in place.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        &mut self,
        nb_of_support_vectors: usize,
        vector_dimension: usize,
        intercept: F,
        dual_coefficients: &'a [F],
        support_vectors: &'a [F],
        classes: &'a [i32; 2],
        coef0: F,
        gamma: F,
    ) {
        self.init_with_kernel(
            nb_of_support_vectors,
            vector_dimension,
            intercept,
            dual_coefficients,
            support_vectors,
            classes,
            Sigmoid::new().with_coef0(coef0).with_gamma(gamma),
        )
    }
}
