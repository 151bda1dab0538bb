//! Integration test: every slider position puts the marker on the analytic resonance.

use lrc_ac::{ExplorerConfig, ResonanceExplorer, resonant_frequency};
use proptest::prelude::*;

#[test]
fn full_slider_travel_tracks_resonance() {
    let cfg = ExplorerConfig::default();
    let mut ex = ResonanceExplorer::new(cfg.clone()).unwrap();
    let y_limits = ex.y_limits();

    let steps = ((cfg.c_max - cfg.c_min) / cfg.c_step).round() as usize;
    for k in 0..=steps {
        let c = cfg.c_min + k as f64 * cfg.c_step;
        ex.set_capacitance(c).unwrap();
        let expected = resonant_frequency(cfg.inductance, ex.capacitance()).unwrap();
        let marker = ex.marker();
        assert!((marker.frequency - expected).abs() <= 1e-12 * expected);
        assert_eq!(ex.label_anchor().0, marker.frequency);
        assert_eq!(ex.y_limits(), y_limits);

        let min = ex.curve().iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(marker.magnitude, min);
    }
}

proptest! {
    #[test]
    fn marker_matches_closed_form(c in 0.1_f64..=10.0) {
        let mut ex = ResonanceExplorer::new(ExplorerConfig::default()).unwrap();
        ex.set_capacitance(c).unwrap();
        let snapped = ex.capacitance();
        prop_assert!((snapped - c).abs() <= 0.05 + 1e-9);

        let expected = 1.0 / (2.0 * std::f64::consts::PI * (1.0 * snapped).sqrt());
        prop_assert!((ex.marker().frequency - expected).abs() <= 1e-12 * expected);
    }
}
