//! TransientModel trait for pluggable dynamic systems.

use crate::error::SimResult;
use lrc_core::Tolerances;

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type (Clone, for snapshots)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
/// - A weighted error norm for adaptive step control
pub trait TransientModel {
    /// State type (must be Clone).
    type State: Clone;

    /// Return the initial state at the start of the span.
    fn initial_state(&self) -> Self::State;

    /// Compute state derivative dxdt = f(t, x).
    ///
    /// Takes &mut self so models can cache intermediate results.
    fn rhs(&mut self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;

    /// RMS of `err_i / (abs + rel * max(|a_i|, |b_i|))` over all components.
    ///
    /// Values at or below 1.0 mean `err` is within tolerance.
    fn error_norm(
        &self,
        err: &Self::State,
        a: &Self::State,
        b: &Self::State,
        tol: Tolerances,
    ) -> f64;
}

/// Scalar states, used by simple test models.
pub fn scalar_error_norm(err: f64, a: f64, b: f64, tol: Tolerances) -> f64 {
    (err / (tol.abs + tol.rel * a.abs().max(b.abs()))).abs()
}
