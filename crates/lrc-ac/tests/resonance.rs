//! Integration test: impedance minimum sits at the analytic resonance.

use lrc_ac::{SweepConfig, resonant_frequency, sweep};
use lrc_core::Grid;
use proptest::prelude::*;

/// Ratio between neighbouring samples of the grid.
fn grid_ratio(grid: &Grid) -> f64 {
    grid.step()
}

#[test]
fn minimum_within_one_grid_step_for_every_resistance() {
    let cfg = SweepConfig::default();
    let result = sweep(&cfg).unwrap();
    let ratio = grid_ratio(&cfg.grid);

    for curve in &result.curves {
        let min = curve.minimum(&result.freqs).unwrap();
        let rel = min.frequency / result.resonant_hz;
        assert!(
            rel <= ratio && rel >= 1.0 / ratio,
            "R={}: minimum at {} Hz, resonance {} Hz",
            curve.resistance,
            min.frequency,
            result.resonant_hz
        );
        // At resonance only the resistance remains.
        assert!((min.magnitude - curve.resistance) / curve.resistance < 1e-3);
    }
}

#[test]
fn repeated_sweeps_are_identical() {
    let cfg = SweepConfig::default();
    let a = sweep(&cfg).unwrap();
    let b = sweep(&cfg).unwrap();
    assert_eq!(a.freqs, b.freqs);
    for (ca, cb) in a.curves.iter().zip(&b.curves) {
        assert_eq!(ca.magnitude, cb.magnitude);
    }
}

proptest! {
    #[test]
    fn minimum_tracks_resonance(
        l in 0.2_f64..5.0,
        c in 0.2_f64..5.0,
        r in 0.01_f64..5.0,
    ) {
        let grid = Grid::logspace(-2.0, 1.0, 3000).unwrap();
        let cfg = SweepConfig {
            inductance: l,
            capacitance: c,
            resistances: vec![r],
            grid,
        };
        let result = sweep(&cfg).unwrap();
        let expected = resonant_frequency(l, c).unwrap();
        prop_assert!((result.resonant_hz - expected).abs() < 1e-12);

        let min = result.curves[0].minimum(&result.freqs).unwrap();
        let ratio = grid.step();
        let rel = min.frequency / expected;
        prop_assert!(rel <= ratio * (1.0 + 1e-9) && rel >= 1.0 / ratio / (1.0 + 1e-9));
    }
}
