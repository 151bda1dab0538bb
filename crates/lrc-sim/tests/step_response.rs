//! Integration test: series LRC step response across damping regimes.
//!
//! Checks that:
//! - the underdamped case overshoots the steady-state current
//! - critically and overdamped cases never exceed it
//! - every case settles near the steady state by the end of the span
//! - repeated runs are identical
//! - the adaptive and fixed-step solvers agree

use lrc_sim::{
    Damping, SolveMethod, StepResponseConfig, StepSource, damping::critical_resistance,
    step_response,
};

const OVERSHOOT_TOL: f64 = 5e-3;

#[test]
fn underdamped_overshoots_others_do_not() {
    let response = step_response(&StepResponseConfig::default()).expect("step response");

    assert_eq!(response.traces.len(), 3);
    assert!((response.steady_state - 1.0).abs() < 1e-12);

    let under = response.trace(Damping::Underdamped).expect("underdamped trace");
    assert!(under.resistance < critical_resistance(1.0, 1.0));
    assert!(under.overshoots(1.0, OVERSHOOT_TOL));
    // zeta = 0.25 gives a first peak of 1 + exp(-pi zeta / sqrt(1 - zeta^2))
    let expected_peak = 1.0 + (-std::f64::consts::PI * 0.25 / (1.0 - 0.0625_f64).sqrt()).exp();
    let (_, peak) = under.peak().unwrap();
    assert!(
        (peak - expected_peak).abs() < 1e-2,
        "peak={peak} expected={expected_peak}"
    );

    for damping in [Damping::CriticallyDamped, Damping::Overdamped] {
        let trace = response.trace(damping).expect("trace");
        assert!(
            !trace.overshoots(1.0, OVERSHOOT_TOL),
            "{damping} exceeded steady state: {:?}",
            trace.peak()
        );
    }
}

#[test]
fn all_cases_settle_to_steady_state() {
    let response = step_response(&StepResponseConfig::default()).expect("step response");

    for trace in &response.traces {
        let last = trace.final_value().unwrap();
        assert!(
            (last - 1.0).abs() < 2e-2,
            "R={} ended at {last}",
            trace.resistance
        );
        assert_eq!(trace.current.len(), response.t.len());
        assert_eq!(trace.current[0], 0.0);
    }
    assert_eq!(response.t.len(), 1000);
    assert_eq!(response.t[0], 0.0);
    assert_eq!(response.t[999], 20.0);
}

#[test]
fn critically_damped_matches_closed_form() {
    // With L = C = 1 and R = 2: I(t) = 1 - (1 + t) exp(-t)
    let cfg = StepResponseConfig {
        resistances: vec![2.0],
        ..StepResponseConfig::default()
    };
    let response = step_response(&cfg).unwrap();
    let trace = &response.traces[0];
    assert_eq!(trace.damping, Damping::CriticallyDamped);

    for (t, i) in response.t.iter().zip(&trace.current) {
        let exact = 1.0 - (1.0 + t) * (-t).exp();
        assert!((i - exact).abs() < 5e-3, "t={t} i={i} exact={exact}");
    }
}

#[test]
fn repeated_runs_are_identical() {
    let cfg = StepResponseConfig::default();
    let a = step_response(&cfg).unwrap();
    let b = step_response(&cfg).unwrap();

    assert_eq!(a.t, b.t);
    for (ta, tb) in a.traces.iter().zip(&b.traces) {
        assert_eq!(ta.current, tb.current);
        assert_eq!(ta.stats, tb.stats);
    }
}

#[test]
fn fixed_step_rk4_agrees_with_adaptive() {
    let adaptive = step_response(&StepResponseConfig::default()).unwrap();
    let fixed = step_response(&StepResponseConfig {
        method: SolveMethod::Rk4,
        ..StepResponseConfig::default()
    })
    .unwrap();

    assert_eq!(adaptive.t.len(), fixed.t.len());
    for (a, f) in adaptive.traces.iter().zip(&fixed.traces) {
        let max_diff = a
            .current
            .iter()
            .zip(&f.current)
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f64::max);
        assert!(max_diff < 1e-2, "R={} max diff {max_diff}", a.resistance);
    }
}

#[test]
fn delayed_step_stays_at_rest_until_onset() {
    let cfg = StepResponseConfig {
        resistances: vec![0.5],
        source: StepSource {
            amplitude: 1.0,
            onset: 5.0,
        },
        t_span: (0.0, 40.0),
        samples: 401,
        ..StepResponseConfig::default()
    };
    let response = step_response(&cfg).unwrap();
    let trace = &response.traces[0];

    for (t, i) in response.t.iter().zip(&trace.current) {
        if *t < 5.0 {
            assert_eq!(*i, 0.0, "current moved before onset at t={t}");
        }
    }
    assert!(trace.overshoots(1.0, OVERSHOOT_TOL));
    assert!((trace.final_value().unwrap() - 1.0).abs() < 2e-2);
}
