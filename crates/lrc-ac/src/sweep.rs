//! Impedance magnitude sweeps for several resistances.

use crate::error::{AcError, AcResult};
use crate::impedance::{SeriesLrcParams, frequency_response};
use lrc_core::{Grid, argmin};

/// A point on an impedance curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResonancePoint {
    /// Hertz
    pub frequency: f64,
    /// Ohm
    pub magnitude: f64,
}

/// Inputs for a frequency sweep.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Henry
    pub inductance: f64,
    /// Farad
    pub capacitance: f64,
    /// Ohm, one curve per value
    pub resistances: Vec<f64>,
    pub grid: Grid,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            inductance: 1.0,
            capacitance: 1.0,
            resistances: vec![0.5, 2.0, 4.0],
            grid: Grid {
                start: 0.1,
                end: 10.0,
                points: 1000,
                spacing: lrc_core::GridSpacing::Logarithmic,
            },
        }
    }
}

/// `|Z|` over the sweep grid for one resistance.
#[derive(Clone, Debug)]
pub struct ImpedanceCurve {
    pub resistance: f64,
    pub magnitude: Vec<f64>,
}

impl ImpedanceCurve {
    /// Smallest magnitude on the grid and the frequency where it occurs.
    pub fn minimum(&self, freqs: &[f64]) -> Option<ResonancePoint> {
        let (idx, magnitude) = argmin(&self.magnitude)?;
        Some(ResonancePoint {
            frequency: *freqs.get(idx)?,
            magnitude,
        })
    }
}

/// Result of a frequency sweep.
#[derive(Clone, Debug)]
pub struct SweepResult {
    /// Hertz, ascending
    pub freqs: Vec<f64>,
    /// Henry
    pub inductance: f64,
    /// Farad
    pub capacitance: f64,
    pub resonant_hz: f64,
    pub curves: Vec<ImpedanceCurve>,
}

/// Evaluate `|Z(f)|` over the grid once per resistance.
pub fn sweep(cfg: &SweepConfig) -> AcResult<SweepResult> {
    if cfg.resistances.is_empty() {
        return Err(AcError::InvalidArg {
            what: "at least one resistance is required",
        });
    }
    cfg.grid.validate()?;
    if cfg.grid.start <= 0.0 {
        return Err(AcError::InvalidFrequency {
            value: cfg.grid.start,
        });
    }

    let freqs = cfg.grid.generate();
    let mut curves = Vec::with_capacity(cfg.resistances.len());
    let mut resonant_hz = f64::NAN;
    for &resistance in &cfg.resistances {
        let params = SeriesLrcParams::new(cfg.inductance, resistance, cfg.capacitance)?;
        resonant_hz = params.resonant_frequency();
        curves.push(ImpedanceCurve {
            resistance,
            magnitude: frequency_response(cfg.inductance, resistance, cfg.capacitance, &freqs)?,
        });
    }

    Ok(SweepResult {
        freqs,
        inductance: cfg.inductance,
        capacitance: cfg.capacitance,
        resonant_hz,
        curves,
    })
}

/// Marker for a resonance display: analytic frequency, grid-minimum magnitude.
pub fn resonance_point(
    inductance: f64,
    resistance: f64,
    capacitance: f64,
    freqs: &[f64],
) -> AcResult<(ResonancePoint, Vec<f64>)> {
    let params = SeriesLrcParams::new(inductance, resistance, capacitance)?;
    let magnitude = frequency_response(inductance, resistance, capacitance, freqs)?;
    let (_, min_z) = argmin(&magnitude).ok_or(AcError::InvalidArg {
        what: "frequency grid must not be empty",
    })?;
    Ok((
        ResonancePoint {
            frequency: params.resonant_frequency(),
            magnitude: min_z,
        },
        magnitude,
    ))
}
