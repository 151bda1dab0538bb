//! Adaptive step-size integration with dense output.
//!
//! The solver advances with the Dormand-Prince 5(4) pair and only reports
//! states at the requested evaluation times, interpolating inside accepted
//! steps. Step size control follows the usual scheme: the weighted RMS error
//! must stay at or below one, and the next step is scaled by
//! `safety * err^(-1/5)` within fixed growth bounds.

use crate::error::{SimError, SimResult};
use crate::integrator::{DormandPrince45, hermite};
use crate::model::TransientModel;
use crate::sim::{SimRecord, SolverStats};
use lrc_core::Tolerances;
use tracing::{debug, trace};

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 10.0;

/// Options for adaptive runs.
#[derive(Clone, Debug)]
pub struct AdaptiveOptions {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
    /// Maximum number of attempted steps (safety limit)
    pub max_steps: usize,
    /// Initial step; estimated from the model when `None`
    pub first_step: Option<f64>,
    /// Upper bound on the step; the whole span when `None`
    pub max_step: Option<f64>,
}

impl Default for AdaptiveOptions {
    fn default() -> Self {
        Self {
            rtol: 1e-3,
            atol: 1e-6,
            max_steps: 1_000_000,
            first_step: None,
            max_step: None,
        }
    }
}

impl AdaptiveOptions {
    fn tolerances(&self) -> Tolerances {
        Tolerances {
            abs: self.atol,
            rel: self.rtol,
        }
    }

    fn validate(&self) -> SimResult<()> {
        if !(self.rtol.is_finite() && self.rtol > 0.0) {
            return Err(SimError::InvalidArg {
                what: "rtol must be positive",
            });
        }
        if !(self.atol.is_finite() && self.atol >= 0.0) {
            return Err(SimError::InvalidArg {
                what: "atol must be non-negative",
            });
        }
        if self.max_steps == 0 {
            return Err(SimError::InvalidArg {
                what: "max_steps must be positive",
            });
        }
        if let Some(h) = self.first_step
            && !(h.is_finite() && h > 0.0)
        {
            return Err(SimError::InvalidArg {
                what: "first_step must be positive",
            });
        }
        if let Some(h) = self.max_step
            && !(h.is_finite() && h > 0.0)
        {
            return Err(SimError::InvalidArg {
                what: "max_step must be positive",
            });
        }
        Ok(())
    }
}

/// Integrate `model` over `t_span`, reporting states at `t_eval`.
///
/// `t_eval` must be non-empty, sorted ascending and inside `t_span`.
pub fn solve_ivp<M: TransientModel>(
    model: &mut M,
    t_span: (f64, f64),
    t_eval: &[f64],
    opts: &AdaptiveOptions,
) -> SimResult<SimRecord<M::State>> {
    opts.validate()?;
    let (t0, t_end) = t_span;
    if !(t0.is_finite() && t_end.is_finite()) || t_end <= t0 {
        return Err(SimError::InvalidArg {
            what: "t_span must be finite and increasing",
        });
    }
    check_eval_times(t_span, t_eval)?;

    let tol = opts.tolerances();
    let dp = DormandPrince45;
    let max_step = opts.max_step.unwrap_or(t_end - t0).min(t_end - t0);

    let mut stats = SolverStats::default();
    let mut t = t0;
    let mut x = model.initial_state();
    let mut f = model.rhs(t, &x)?;
    stats.rhs_calls += 1;

    let mut dt = match opts.first_step {
        Some(h) => h,
        None => {
            let (h, calls) = initial_step(model, t, &x, &f, tol)?;
            stats.rhs_calls += calls;
            h
        }
    }
    .min(max_step);

    let mut t_out = Vec::with_capacity(t_eval.len());
    let mut x_out = Vec::with_capacity(t_eval.len());
    let mut idx = 0;
    while idx < t_eval.len() && t_eval[idx] <= t0 {
        t_out.push(t_eval[idx]);
        x_out.push(x.clone());
        idx += 1;
    }

    let mut attempts = 0;
    let mut just_rejected = false;
    while t < t_end {
        if attempts >= opts.max_steps {
            return Err(SimError::MaxStepsExceeded {
                max_steps: opts.max_steps,
                t,
            });
        }
        attempts += 1;

        let min_step = 10.0 * f64::EPSILON * t.abs().max(1.0);
        if dt < min_step {
            return Err(SimError::StepSizeUnderflow { t, dt });
        }

        // Land exactly on the end of the span instead of stepping over it.
        let mut h = dt.min(max_step);
        let hits_end = t + h >= t_end;
        if hits_end {
            h = t_end - t;
        }

        let step = dp.attempt(model, t, &x, &f, h)?;
        stats.rhs_calls += 6;
        let err = model.error_norm(&step.err, &x, &step.x_new, tol);

        if !err.is_finite() {
            stats.rejected += 1;
            just_rejected = true;
            dt = h * MIN_FACTOR;
            trace!(t, h, "non-finite error estimate, cutting step");
            continue;
        }

        if err > 1.0 {
            stats.rejected += 1;
            just_rejected = true;
            dt = h * (SAFETY * err.powf(DormandPrince45::ERROR_EXPONENT)).max(MIN_FACTOR);
            trace!(t, h, err, "step rejected");
            continue;
        }

        let t_new = if hits_end { t_end } else { t + h };
        while idx < t_eval.len() && t_eval[idx] <= t_new {
            let te = t_eval[idx];
            let state = if te == t_new {
                step.x_new.clone()
            } else {
                let theta = (te - t) / h;
                hermite(model, &x, &f, &step.x_new, &step.f_new, h, theta)
            };
            t_out.push(te);
            x_out.push(state);
            idx += 1;
        }

        stats.accepted += 1;
        let mut factor = if err == 0.0 {
            MAX_FACTOR
        } else {
            (SAFETY * err.powf(DormandPrince45::ERROR_EXPONENT)).clamp(MIN_FACTOR, MAX_FACTOR)
        };
        if just_rejected {
            factor = factor.min(1.0);
        }
        just_rejected = false;

        t = t_new;
        x = step.x_new;
        f = step.f_new;
        dt = h * factor;
    }

    debug!(
        accepted = stats.accepted,
        rejected = stats.rejected,
        rhs_calls = stats.rhs_calls,
        "adaptive run finished"
    );

    Ok(SimRecord {
        t: t_out,
        x: x_out,
        stats,
    })
}

fn check_eval_times(t_span: (f64, f64), t_eval: &[f64]) -> SimResult<()> {
    if t_eval.is_empty() {
        return Err(SimError::InvalidArg {
            what: "t_eval must not be empty",
        });
    }
    if t_eval.windows(2).any(|w| !(w[1] >= w[0])) {
        return Err(SimError::InvalidArg {
            what: "t_eval must be sorted ascending",
        });
    }
    let (first, last) = (t_eval[0], t_eval[t_eval.len() - 1]);
    if first < t_span.0 || last > t_span.1 {
        return Err(SimError::InvalidArg {
            what: "t_eval must lie inside t_span",
        });
    }
    Ok(())
}

/// Starting step estimate (Hairer, Norsett & Wanner, II.4).
fn initial_step<M: TransientModel>(
    model: &mut M,
    t: f64,
    x: &M::State,
    f: &M::State,
    tol: Tolerances,
) -> SimResult<(f64, usize)> {
    let d0 = model.error_norm(x, x, x, tol);
    let d1 = model.error_norm(f, x, x, tol);
    let h0 = if d0 < 1e-5 || d1 < 1e-5 {
        1e-6
    } else {
        0.01 * d0 / d1
    };

    let x1 = model.add(x, &model.scale(f, h0));
    let f1 = model.rhs(t + h0, &x1)?;
    let df = model.add(&f1, &model.scale(f, -1.0));
    let d2 = model.error_norm(&df, x, x, tol) / h0;

    let h1 = if d1.max(d2) <= 1e-15 {
        (h0 * 1e-3).max(1e-6)
    } else {
        (0.01 / d1.max(d2)).powf(1.0 / DormandPrince45::ORDER as f64)
    };

    Ok(((100.0 * h0).min(h1), 1))
}
