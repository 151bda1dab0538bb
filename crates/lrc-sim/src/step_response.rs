//! Step response of a series LRC circuit for several resistances.

use crate::adaptive::{AdaptiveOptions, solve_ivp};
use crate::circuit::{SeriesLrc, StepSource};
use crate::damping::{Damping, classify, natural_frequency_hz};
use crate::error::{SimError, SimResult};
use crate::sim::{IntegratorType, SimOptions, SolverStats, run_sim};
use lrc_core::Grid;
use tracing::{debug, info};

/// How each trajectory is integrated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SolveMethod {
    /// Adaptive Dormand-Prince 5(4), sampled at the output grid.
    Rk45 { rtol: f64, atol: f64 },
    /// Fixed-step RK4 with the output grid spacing as step.
    Rk4,
}

impl Default for SolveMethod {
    fn default() -> Self {
        SolveMethod::Rk45 {
            rtol: 1e-3,
            atol: 1e-6,
        }
    }
}

/// Inputs for a step response study.
#[derive(Clone, Debug)]
pub struct StepResponseConfig {
    /// Henry
    pub inductance: f64,
    /// Farad
    pub capacitance: f64,
    /// Ohm, one trajectory per value
    pub resistances: Vec<f64>,
    pub source: StepSource,
    /// Seconds
    pub t_span: (f64, f64),
    /// Number of output samples over `t_span`, end points included
    pub samples: usize,
    pub method: SolveMethod,
}

impl Default for StepResponseConfig {
    fn default() -> Self {
        Self {
            inductance: 1.0,
            capacitance: 1.0,
            resistances: vec![0.5, 2.0, 4.0],
            source: StepSource::default(),
            t_span: (0.0, 20.0),
            samples: 1000,
            method: SolveMethod::default(),
        }
    }
}

/// Sampled current for one resistance.
#[derive(Clone, Debug)]
pub struct CurrentTrace {
    pub resistance: f64,
    pub damping: Damping,
    /// Amperes at each output time
    pub current: Vec<f64>,
    /// dI/dt at each output time
    pub current_rate: Vec<f64>,
    pub stats: SolverStats,
}

impl CurrentTrace {
    /// Largest current and the index where it occurs.
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.current
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Whether the current ever exceeds `level` by more than `tol`.
    pub fn overshoots(&self, level: f64, tol: f64) -> bool {
        self.current.iter().any(|i| *i > level + tol)
    }

    pub fn final_value(&self) -> Option<f64> {
        self.current.last().copied()
    }
}

/// Result of a step response study.
#[derive(Clone, Debug)]
pub struct StepResponse {
    /// Output times (seconds)
    pub t: Vec<f64>,
    pub traces: Vec<CurrentTrace>,
    pub natural_frequency_hz: f64,
    /// Value every trace settles to
    pub steady_state: f64,
}

impl StepResponse {
    pub fn trace(&self, damping: Damping) -> Option<&CurrentTrace> {
        self.traces.iter().find(|t| t.damping == damping)
    }
}

/// Integrate the circuit once per resistance over a common output grid.
pub fn step_response(cfg: &StepResponseConfig) -> SimResult<StepResponse> {
    if cfg.resistances.is_empty() {
        return Err(SimError::InvalidArg {
            what: "at least one resistance is required",
        });
    }
    let (t0, t1) = cfg.t_span;
    let grid = Grid::linspace(t0, t1, cfg.samples)?;
    let t_eval = grid.generate();

    let natural_frequency_hz = natural_frequency_hz(cfg.inductance, cfg.capacitance);
    info!(
        natural_frequency_hz,
        cases = cfg.resistances.len(),
        "running step response"
    );

    let mut traces = Vec::with_capacity(cfg.resistances.len());
    let mut steady_state = 0.0;
    for &resistance in &cfg.resistances {
        let mut model = SeriesLrc::new(cfg.inductance, resistance, cfg.capacitance, cfg.source)?;
        steady_state = model.steady_state_current();

        let record = match cfg.method {
            SolveMethod::Rk45 { rtol, atol } => {
                let opts = AdaptiveOptions {
                    rtol,
                    atol,
                    ..AdaptiveOptions::default()
                };
                solve_ivp(&mut model, cfg.t_span, &t_eval, &opts)?
            }
            SolveMethod::Rk4 => {
                let opts = SimOptions {
                    t_start: t0,
                    dt: grid.step(),
                    t_end: t1,
                    max_steps: cfg.samples,
                    record_every: 1,
                    integrator: IntegratorType::RK4,
                };
                run_sim(&mut model, &opts)?
            }
        };

        if record.len() != t_eval.len() {
            return Err(SimError::Backend {
                message: format!(
                    "solver returned {} samples, expected {}",
                    record.len(),
                    t_eval.len()
                ),
            });
        }

        let trace = CurrentTrace {
            resistance,
            damping: classify(cfg.inductance, resistance, cfg.capacitance),
            current: record.x.iter().map(|x| x[0]).collect(),
            current_rate: record.x.iter().map(|x| x[1]).collect(),
            stats: record.stats,
        };
        debug!(
            resistance,
            damping = %trace.damping,
            accepted = trace.stats.accepted,
            rejected = trace.stats.rejected,
            peak = ?trace.peak().map(|p| p.1),
            "trajectory integrated"
        );
        traces.push(trace);
    }

    Ok(StepResponse {
        t: t_eval,
        traces,
        natural_frequency_hz,
        steady_state,
    })
}
