//! Damping regime classification for a series LRC circuit.

use lrc_core::{Tolerances, nearly_equal};
use std::fmt;

/// Damping regime, decided by `R` against `2 sqrt(L / C)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Damping {
    /// Oscillatory decay, overshoots the final value.
    Underdamped,
    /// Fastest return without overshoot.
    CriticallyDamped,
    /// Slow return without overshoot.
    Overdamped,
}

/// `2 sqrt(L / C)` in ohm.
pub fn critical_resistance(inductance: f64, capacitance: f64) -> f64 {
    2.0 * (inductance / capacitance).sqrt()
}

/// Damping ratio `zeta = R / 2 * sqrt(C / L)`.
pub fn damping_ratio(inductance: f64, resistance: f64, capacitance: f64) -> f64 {
    resistance / critical_resistance(inductance, capacitance)
}

/// Classify a resistance; within 1e-9 relative of critical counts as critical.
pub fn classify(inductance: f64, resistance: f64, capacitance: f64) -> Damping {
    let r_crit = critical_resistance(inductance, capacitance);
    let tol = Tolerances {
        abs: 1e-12,
        rel: 1e-9,
    };
    if nearly_equal(resistance, r_crit, tol) {
        Damping::CriticallyDamped
    } else if resistance < r_crit {
        Damping::Underdamped
    } else {
        Damping::Overdamped
    }
}

/// Undamped natural frequency `1 / (2 pi sqrt(L C))` in hertz.
pub fn natural_frequency_hz(inductance: f64, capacitance: f64) -> f64 {
    1.0 / (2.0 * std::f64::consts::PI * (inductance * capacitance).sqrt())
}

impl Damping {
    /// Whether the step response can exceed its final value.
    pub fn overshoots(self) -> bool {
        matches!(self, Damping::Underdamped)
    }

    pub fn label(self) -> &'static str {
        match self {
            Damping::Underdamped => "Underdamped",
            Damping::CriticallyDamped => "Critically damped",
            Damping::Overdamped => "Overdamped",
        }
    }
}

impl fmt::Display for Damping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
