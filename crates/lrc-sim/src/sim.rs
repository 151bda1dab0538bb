//! Fixed-step simulation runner and result recording.

use crate::error::{SimError, SimResult};
use crate::integrator::{DormandPrince45, ForwardEuler, Integrator, RK4};
use crate::model::TransientModel;

/// Integrator selection for fixed-step runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, faster, 1 rhs call per step).
    ForwardEuler,
    /// 5th-order solution of the Dormand-Prince pair without step control.
    DormandPrince45,
}

/// Options for fixed-step simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Start time (seconds)
    pub t_start: f64,
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    /// Integrator type (default: RK4)
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            t_start: 0.0,
            dt: 1e-3,
            t_end: 1.0,
            max_steps: 100_000,
            record_every: 10,
            integrator: IntegratorType::default(),
        }
    }
}

/// Work counters for a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    pub accepted: usize,
    pub rejected: usize,
    pub rhs_calls: usize,
}

/// Record of simulation results.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
    pub stats: SolverStats,
}

impl<S> SimRecord<S> {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

/// Run a transient simulation with a fixed step.
///
/// Time points are computed as `t_start + n * dt` so long runs do not
/// accumulate rounding drift.
pub fn run_sim<M: TransientModel>(
    model: &mut M,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>> {
    if opts.dt.is_nan() || opts.dt <= 0.0 {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if opts.t_end < opts.t_start {
        return Err(SimError::InvalidArg {
            what: "t_end must not precede t_start",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let rhs_per_step = match opts.integrator {
        IntegratorType::RK4 => 4,
        IntegratorType::ForwardEuler => 1,
        IntegratorType::DormandPrince45 => 7,
    };

    let mut t = opts.t_start;
    let mut x = model.initial_state();

    let mut t_record = vec![t];
    let mut x_record = vec![x.clone()];

    // Half a step of slack so t_end lands on the last step despite rounding.
    let end = opts.t_end - 0.5 * opts.dt;
    let mut step = 0;
    while t < end && step < opts.max_steps {
        x = match opts.integrator {
            IntegratorType::RK4 => RK4.step(model, t, &x, opts.dt)?,
            IntegratorType::ForwardEuler => ForwardEuler.step(model, t, &x, opts.dt)?,
            IntegratorType::DormandPrince45 => DormandPrince45.step(model, t, &x, opts.dt)?,
        };
        step += 1;
        t = opts.t_start + step as f64 * opts.dt;

        // Record if decimation matches
        if step % opts.record_every == 0 {
            t_record.push(t);
            x_record.push(x.clone());
        }
    }

    // Always record final state
    if step % opts.record_every != 0 {
        t_record.push(t);
        x_record.push(x);
    }

    Ok(SimRecord {
        t: t_record,
        x: x_record,
        stats: SolverStats {
            accepted: step,
            rejected: 0,
            rhs_calls: step * rhs_per_step,
        },
    })
}
