//! Discrete-time linear plant model.

use nalgebra::{SMatrix, SVector};

/// Fixed linear discrete-time model of a mechanism's dynamics:
///
/// ```text
/// x[k+1] = A x[k] + B u[k]
/// y[k]   = C x[k]
/// ```
///
/// `NS` states, `NI` inputs, `NO` outputs. The model is immutable
/// configuration; evolving state lives in the observer (or in a test's
/// truth simulation). Dimension agreement between A, B and C is enforced
/// by the types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateSpacePlant<const NS: usize, const NI: usize, const NO: usize> {
    a: SMatrix<f64, NS, NS>,
    b: SMatrix<f64, NS, NI>,
    c: SMatrix<f64, NO, NS>,
}

impl<const NS: usize, const NI: usize, const NO: usize> StateSpacePlant<NS, NI, NO> {
    /// Create a plant from its system matrices.
    pub fn new(
        a: SMatrix<f64, NS, NS>,
        b: SMatrix<f64, NS, NI>,
        c: SMatrix<f64, NO, NS>,
    ) -> Self {
        Self { a, b, c }
    }

    /// Advance one step: `A x + B u`.
    #[inline]
    pub fn predict(&self, x: &SVector<f64, NS>, u: &SVector<f64, NI>) -> SVector<f64, NS> {
        self.a * x + self.b * u
    }

    /// Measured output for a state: `C x`.
    #[inline]
    pub fn output(&self, x: &SVector<f64, NS>) -> SVector<f64, NO> {
        self.c * x
    }

    /// State transition matrix.
    #[inline]
    pub fn a(&self) -> &SMatrix<f64, NS, NS> {
        &self.a
    }

    /// Input matrix.
    #[inline]
    pub fn b(&self) -> &SMatrix<f64, NS, NI> {
        &self.b
    }

    /// Output matrix.
    #[inline]
    pub fn c(&self) -> &SMatrix<f64, NO, NS> {
        &self.c
    }
}
