// src/backend/symbolic.rs

use super::Backend;
use crate::core::Exact;

/// Exact back-end over [`Exact`] values in `Q(i, √2)`.
///
/// Every `Exact` is kept in canonical form, so the checks reduce to plain
/// equality: `1/√2·1/√2 + i/√2·(-i/√2)` is stored as the rational `1` and
/// compares equal without any simplification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Symbolic;

impl Symbolic {
    pub fn new() -> Self {
        Symbolic
    }
}

impl Backend for Symbolic {
    type Scalar = Exact;

    fn name(&self) -> &'static str {
        "symbolic"
    }

    fn equivalent(&self, actual: &Exact, expected: &Exact) -> bool {
        actual == expected
    }
}
