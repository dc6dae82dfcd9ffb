//! Default values shared by the back-ends.

/// Tolerances and thresholds used when the caller does not override them.
pub mod defaults {
    /// Relative tolerance for floating-point closeness (`|a - b| <= atol + rtol * |b|`).
    pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1e-8;
    /// Absolute tolerance for floating-point closeness.
    pub const DEFAULT_ABSOLUTE_TOLERANCE: f64 = 1e-8;
    /// Composite size (in matrix entries) above which tensor composition logs a warning.
    /// 2^20 entries is a 20-qubit state vector.
    pub const LARGE_COMPOSITE_WARN_ELEMENTS: usize = 1 << 20;
}
