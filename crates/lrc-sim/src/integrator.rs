//! Explicit Runge-Kutta steppers.

use crate::error::SimResult;
use crate::model::TransientModel;

/// Trait for fixed-step time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let k1 = model.rhs(t, x)?;

        let x2 = model.add(x, &model.scale(&k1, 0.5 * dt));
        let k2 = model.rhs(t + 0.5 * dt, &x2)?;

        let x3 = model.add(x, &model.scale(&k2, 0.5 * dt));
        let k3 = model.rhs(t + 0.5 * dt, &x3)?;

        let x4 = model.add(x, &model.scale(&k3, dt));
        let k4 = model.rhs(t + dt, &x4)?;

        // Combine: x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        Ok(model.add(x, &model.scale(&k_sum, dt / 6.0)))
    }
}

/// Forward Euler (explicit, 1st order, fast for testing).
/// Calls rhs() once per step instead of 4 times (RK4).
#[derive(Clone, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let xdot = model.rhs(t, x)?;
        Ok(model.add(x, &model.scale(&xdot, dt)))
    }
}

// Dormand-Prince 5(4) tableau.
const C: [f64; 7] = [0.0, 1.0 / 5.0, 3.0 / 10.0, 4.0 / 5.0, 8.0 / 9.0, 1.0, 1.0];

const A: [&[f64]; 7] = [
    &[],
    &[1.0 / 5.0],
    &[3.0 / 40.0, 9.0 / 40.0],
    &[44.0 / 45.0, -56.0 / 15.0, 32.0 / 9.0],
    &[
        19372.0 / 6561.0,
        -25360.0 / 2187.0,
        64448.0 / 6561.0,
        -212.0 / 729.0,
    ],
    &[
        9017.0 / 3168.0,
        -355.0 / 33.0,
        46732.0 / 5247.0,
        49.0 / 176.0,
        -5103.0 / 18656.0,
    ],
    &[
        35.0 / 384.0,
        0.0,
        500.0 / 1113.0,
        125.0 / 192.0,
        -2187.0 / 6784.0,
        11.0 / 84.0,
    ],
];

// Difference between the 5th and 4th order weights.
const E: [f64; 7] = [
    71.0 / 57600.0,
    0.0,
    -71.0 / 16695.0,
    71.0 / 1920.0,
    -17253.0 / 339200.0,
    22.0 / 525.0,
    -1.0 / 40.0,
];

/// Result of one Dormand-Prince step attempt.
#[derive(Clone, Debug)]
pub struct DpStep<S> {
    /// 5th order solution at t + dt
    pub x_new: S,
    /// Derivative at (t + dt, x_new); reusable as k1 of the next step
    pub f_new: S,
    /// Local error estimate (5th minus 4th order solution)
    pub err: S,
}

/// Dormand-Prince 5(4) embedded pair with first-same-as-last stages.
#[derive(Clone, Debug)]
pub struct DormandPrince45;

impl DormandPrince45 {
    pub const ORDER: i32 = 5;
    pub const ERROR_EXPONENT: f64 = -1.0 / 5.0;

    /// Take one step of size `dt` from `(t, x)` given `f0 = rhs(t, x)`.
    pub fn attempt<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        f0: &M::State,
        dt: f64,
    ) -> SimResult<DpStep<M::State>> {
        let mut k: Vec<M::State> = Vec::with_capacity(7);
        k.push(f0.clone());

        for stage in 1..7 {
            let mut xs = x.clone();
            for (j, a) in A[stage].iter().enumerate() {
                if *a != 0.0 {
                    xs = model.add(&xs, &model.scale(&k[j], a * dt));
                }
            }
            k.push(model.rhs(t + C[stage] * dt, &xs)?);
        }

        // Stage 7 is evaluated at the 5th order solution (FSAL).
        let mut x_new = x.clone();
        for (j, a) in A[6].iter().enumerate() {
            if *a != 0.0 {
                x_new = model.add(&x_new, &model.scale(&k[j], a * dt));
            }
        }

        let mut err = model.scale(&k[0], E[0] * dt);
        for (j, e) in E.iter().enumerate().skip(1) {
            if *e != 0.0 {
                err = model.add(&err, &model.scale(&k[j], e * dt));
            }
        }

        let f_new = k.swap_remove(6);
        Ok(DpStep { x_new, f_new, err })
    }
}

impl Integrator for DormandPrince45 {
    fn step<M: TransientModel>(
        &self,
        model: &mut M,
        t: f64,
        x: &M::State,
        dt: f64,
    ) -> SimResult<M::State> {
        let f0 = model.rhs(t, x)?;
        Ok(self.attempt(model, t, x, &f0, dt)?.x_new)
    }
}

/// Cubic Hermite interpolation inside an accepted step.
///
/// `theta` is the normalized position in `[0, 1]` between `(x0, f0)` at the
/// start and `(x1, f1)` at the end of a step of size `dt`.
pub fn hermite<M: TransientModel>(
    model: &M,
    x0: &M::State,
    f0: &M::State,
    x1: &M::State,
    f1: &M::State,
    dt: f64,
    theta: f64,
) -> M::State {
    let t2 = theta * theta;
    let t3 = t2 * theta;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + theta;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    let a = model.add(&model.scale(x0, h00), &model.scale(f0, h10 * dt));
    let b = model.add(&model.scale(x1, h01), &model.scale(f1, h11 * dt));
    model.add(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scalar_error_norm;
    use lrc_core::Tolerances;

    /// x' = -x, x(0) = 1
    struct Decay;

    impl TransientModel for Decay {
        type State = f64;

        fn initial_state(&self) -> f64 {
            1.0
        }

        fn rhs(&mut self, _t: f64, x: &f64) -> SimResult<f64> {
            Ok(-x)
        }

        fn add(&self, a: &f64, b: &f64) -> f64 {
            a + b
        }

        fn scale(&self, a: &f64, scale: f64) -> f64 {
            a * scale
        }

        fn error_norm(&self, err: &f64, a: &f64, b: &f64, tol: Tolerances) -> f64 {
            scalar_error_norm(*err, *a, *b, tol)
        }
    }

    #[test]
    fn tableau_rows_sum_to_nodes() {
        for (row, c) in A.iter().zip(C.iter()) {
            let sum: f64 = row.iter().sum();
            assert!((sum - c).abs() < 1e-14, "row sum {sum} != {c}");
        }
        let e_sum: f64 = E.iter().sum();
        assert!(e_sum.abs() < 1e-14);
    }

    #[test]
    fn single_steps_match_exponential() {
        let exact = (-0.1_f64).exp();
        let mut model = Decay;

        let euler = ForwardEuler.step(&mut model, 0.0, &1.0, 0.1).unwrap();
        let rk4 = RK4.step(&mut model, 0.0, &1.0, 0.1).unwrap();
        let dp = DormandPrince45.step(&mut model, 0.0, &1.0, 0.1).unwrap();

        assert!((euler - exact).abs() < 1e-2);
        assert!((rk4 - exact).abs() < 1e-6);
        assert!((dp - exact).abs() < 1e-8);
    }

    #[test]
    fn error_estimate_is_small_for_smooth_step() {
        let mut model = Decay;
        let f0 = model.rhs(0.0, &1.0).unwrap();
        let step = DormandPrince45
            .attempt(&mut model, 0.0, &1.0, &f0, 0.1)
            .unwrap();
        assert!(step.err.abs() < 1e-5);
        assert!((step.f_new + step.x_new).abs() < 1e-15);
    }

    #[test]
    fn hermite_hits_end_points() {
        let model = Decay;
        let x1 = (-0.5_f64).exp();
        let at_start = hermite(&model, &1.0, &-1.0, &x1, &-x1, 0.5, 0.0);
        let at_end = hermite(&model, &1.0, &-1.0, &x1, &-x1, 0.5, 1.0);
        let mid = hermite(&model, &1.0, &-1.0, &x1, &-x1, 0.5, 0.5);
        assert!((at_start - 1.0).abs() < 1e-15);
        assert!((at_end - x1).abs() < 1e-15);
        assert!((mid - (-0.25_f64).exp()).abs() < 5e-4);
    }
}
