// src/backend/mod.rs

//! The four state/operator operations behind one trait, with a floating-point
//! and an exact implementation.
//!
//! Callers pick a back-end explicitly. Operands of one back-end share its
//! associated [`Scalar`] type, so mixing numeric and exact matrices is
//! rejected by the compiler rather than coerced at runtime; converting an
//! exact matrix to floating point is an explicit call
//! ([`Matrix::to_numeric`](crate::core::Matrix::to_numeric)).

mod numeric;
mod symbolic;

pub use numeric::Numeric;
pub use symbolic::Symbolic;

use crate::core::{LARGE_COMPOSITE_WARN_ELEMENTS, Matrix, QubitError, Result, Scalar};
use log::{debug, trace, warn};
use num_traits::One;

/// A choice of scalar field plus the equality rule used by the checks.
///
/// Implementors supply [`Backend::equivalent`]; the four operations are
/// provided on top of it. Every method is a pure function of its arguments.
pub trait Backend {
    /// Amplitude type of this back-end.
    type Scalar: Scalar;

    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Equality rule for the checks: tolerant for floating point, exact for
    /// the symbolic field. `expected` is the reference value.
    fn equivalent(&self, actual: &Self::Scalar, expected: &Self::Scalar) -> bool;

    /// Whether `(alpha, beta)` is a normalized 2-level state: `|α|² + |β|² = 1`
    /// under [`Backend::equivalent`]. A classification, never an error.
    fn is_valid_state(&self, alpha: &Self::Scalar, beta: &Self::Scalar) -> bool {
        let norm = alpha.modulus_sqr() + beta.modulus_sqr();
        let valid = self.equivalent(&norm, &<Self::Scalar as One>::one());
        trace!("{}: |alpha|^2 + |beta|^2 = {} -> valid={}", self.name(), norm, valid);
        valid
    }

    /// Whether a state of any dimension satisfies `Σ|cᵢ|² = 1`.
    fn is_normalized(&self, state: &Matrix<Self::Scalar>) -> bool {
        let norm = state.squared_norm();
        let normalized = self.equivalent(&norm, &<Self::Scalar as One>::one());
        trace!("{}: squared norm {} -> normalized={}", self.name(), norm, normalized);
        normalized
    }

    /// Left-fold Kronecker product `((o₁ ⊗ o₂) ⊗ o₃) ⊗ …` in the order given.
    ///
    /// A single operand comes back unchanged. The composite's dimension is the
    /// product of the operand dimensions, so cost grows exponentially with
    /// qubit count; a warning is logged past
    /// [`LARGE_COMPOSITE_WARN_ELEMENTS`].
    ///
    /// # Errors
    /// * `QubitError::EmptyInput` for zero operands.
    /// * `QubitError::Shape` if the composite dimension overflows `usize`.
    fn tensor_product(&self, operands: &[Matrix<Self::Scalar>]) -> Result<Matrix<Self::Scalar>> {
        let (first, rest) = operands.split_first().ok_or(QubitError::EmptyInput)?;
        let mut composite = first.clone();
        for operand in rest {
            composite = composite.kron(operand)?;
            debug!(
                "{}: tensor step -> {}x{} composite",
                self.name(),
                composite.rows(),
                composite.cols()
            );
        }
        let elements = composite.rows() * composite.cols();
        if elements > LARGE_COMPOSITE_WARN_ELEMENTS {
            warn!(
                "{}: tensor product of {} operands holds {} entries; size grows exponentially with qubit count",
                self.name(),
                operands.len(),
                elements
            );
        }
        Ok(composite)
    }

    /// Whether `M·Mᴴ` equals the identity under [`Backend::equivalent`].
    ///
    /// # Errors
    /// * `QubitError::Shape` if `matrix` is not square.
    fn is_unitary(&self, matrix: &Matrix<Self::Scalar>) -> Result<bool> {
        if !matrix.is_square() {
            return Err(QubitError::shape(
                matrix.rows(),
                matrix.cols(),
                "unitarity requires a square matrix",
            ));
        }
        let product = matrix.matmul(&matrix.conjugate_transpose())?;
        let identity = Matrix::<Self::Scalar>::identity(matrix.rows())?;
        let unitary = product
            .as_slice()
            .iter()
            .zip(identity.as_slice())
            .all(|(actual, expected)| self.equivalent(actual, expected));
        debug!("{}: {}x{} matrix unitary={}", self.name(), matrix.rows(), matrix.cols(), unitary);
        Ok(unitary)
    }

    /// Applies `matrix` to `state` by plain matrix multiplication. The
    /// operator is not checked for unitarity.
    ///
    /// # Errors
    /// * `QubitError::DimensionMismatch` if `matrix.cols() != state.rows()`.
    fn apply_operator(
        &self,
        matrix: &Matrix<Self::Scalar>,
        state: &Matrix<Self::Scalar>,
    ) -> Result<Matrix<Self::Scalar>> {
        let result = matrix.matmul(state)?;
        trace!("{}: applied {}x{} operator", self.name(), matrix.rows(), matrix.cols());
        Ok(result)
    }
}
