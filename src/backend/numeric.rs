// src/backend/numeric.rs

use super::Backend;
use crate::validation::{Tolerance, is_close};
use num_complex::Complex;

/// Floating-point back-end over `Complex<f64>`.
///
/// Normalization and unitarity are decided with the configured
/// [`Tolerance`]; the default is `1e-8` relative and `1e-8` absolute.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Numeric {
    tolerance: Tolerance,
}

impl Numeric {
    /// Numeric back-end with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Numeric back-end with a caller-chosen tolerance.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }
}

impl Backend for Numeric {
    type Scalar = Complex<f64>;

    fn name(&self) -> &'static str {
        "numeric"
    }

    fn equivalent(&self, actual: &Complex<f64>, expected: &Complex<f64>) -> bool {
        is_close(*actual, *expected, &self.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Matrix;

    #[test]
    fn tolerance_is_configurable() {
        let almost = Complex::new(1.0 + 1e-6, 0.0);
        let zero = Complex::new(0.0, 0.0);
        assert!(!Numeric::new().is_valid_state(&almost, &zero));
        let loose = Numeric::with_tolerance(Tolerance::default().with_absolute(1e-3));
        assert!(loose.is_valid_state(&almost, &zero));
    }

    #[test]
    fn exact_tolerance_still_accepts_basis_states() {
        let strict = Numeric::with_tolerance(Tolerance::exact());
        let ket = Matrix::<Complex<f64>>::basis_ket(8, 5).unwrap();
        assert!(strict.is_normalized(&ket));
        assert!(strict.is_unitary(&Matrix::identity(4).unwrap()).unwrap());
    }
}
