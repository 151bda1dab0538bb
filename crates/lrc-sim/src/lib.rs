//! Transient simulation framework for lumped circuits.
//!
//! Provides:
//! - Pluggable transient models (x_dot = f(t, x))
//! - Fixed-step Forward Euler / RK4 / Dormand-Prince integrators
//! - Adaptive Dormand-Prince 5(4) solver with dense output at requested times
//! - Series LRC circuit driven by a voltage step
//! - Step response studies across damping regimes

pub mod adaptive;
pub mod circuit;
pub mod damping;
pub mod error;
pub mod integrator;
pub mod model;
pub mod sim;
pub mod step_response;

// Re-exports for public API
pub use adaptive::{AdaptiveOptions, solve_ivp};
pub use circuit::{LrcState, SeriesLrc, StepSource};
pub use damping::{Damping, classify};
pub use error::{SimError, SimResult};
pub use integrator::{DormandPrince45, ForwardEuler, Integrator, RK4};
pub use model::TransientModel;
pub use sim::{IntegratorType, SimOptions, SimRecord, SolverStats, run_sim};
pub use step_response::{CurrentTrace, SolveMethod, StepResponse, StepResponseConfig, step_response};
