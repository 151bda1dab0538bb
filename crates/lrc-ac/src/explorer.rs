//! Resonance explorer: impedance curve driven by an adjustable capacitance.
//!
//! Holds the current capacitance and everything derived from it. Each
//! accepted change recomputes the curve and the marker synchronously, so a
//! reader never sees a curve that belongs to a different capacitance than
//! the marker.

use crate::error::{AcError, AcResult};
use crate::impedance::SeriesLrcParams;
use crate::sweep::{ResonancePoint, resonance_point};
use lrc_core::{Grid, GridSpacing};

/// Fixed parameters of the explorer.
#[derive(Clone, Debug, PartialEq)]
pub struct ExplorerConfig {
    /// Henry
    pub inductance: f64,
    /// Ohm
    pub resistance: f64,
    /// Farad
    pub c_min: f64,
    pub c_max: f64,
    pub c_step: f64,
    pub c_init: f64,
    pub grid: Grid,
    /// Upper limit of the impedance axis; never changes with capacitance
    pub y_max: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            inductance: 1.0,
            resistance: 0.1,
            c_min: 0.1,
            c_max: 10.0,
            c_step: 0.1,
            c_init: 1.0,
            grid: Grid {
                start: 0.1,
                end: 10.0,
                points: 1000,
                spacing: GridSpacing::Logarithmic,
            },
            y_max: 70.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ResonanceExplorer {
    cfg: ExplorerConfig,
    capacitance: f64,
    freqs: Vec<f64>,
    curve: Vec<f64>,
    marker: ResonancePoint,
}

impl ResonanceExplorer {
    pub fn new(cfg: ExplorerConfig) -> AcResult<Self> {
        SeriesLrcParams::new(cfg.inductance, cfg.resistance, cfg.c_min)?;
        for (v, what) in [(cfg.c_max, "c_max"), (cfg.c_step, "c_step")] {
            if !v.is_finite() || v <= 0.0 {
                return Err(AcError::NonPhysical { what, value: v });
            }
        }
        if cfg.c_max <= cfg.c_min {
            return Err(AcError::InvalidArg {
                what: "capacitance range must be increasing",
            });
        }
        cfg.grid.validate()?;
        if cfg.grid.start <= 0.0 {
            return Err(AcError::InvalidFrequency {
                value: cfg.grid.start,
            });
        }

        let freqs = cfg.grid.generate();
        let capacitance = snap(&cfg, cfg.c_init);
        let (marker, curve) = resonance_point(cfg.inductance, cfg.resistance, capacitance, &freqs)?;
        Ok(Self {
            cfg,
            capacitance,
            freqs,
            curve,
            marker,
        })
    }

    /// Move the slider. Returns whether the snapped value changed.
    pub fn set_capacitance(&mut self, requested: f64) -> AcResult<bool> {
        if !requested.is_finite() {
            return Err(AcError::NonPhysical {
                what: "capacitance",
                value: requested,
            });
        }
        let c = snap(&self.cfg, requested);
        if c == self.capacitance {
            return Ok(false);
        }

        let (marker, curve) =
            resonance_point(self.cfg.inductance, self.cfg.resistance, c, &self.freqs)?;
        self.capacitance = c;
        self.curve = curve;
        self.marker = marker;
        Ok(true)
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.cfg
    }

    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    pub fn freqs(&self) -> &[f64] {
        &self.freqs
    }

    pub fn curve(&self) -> &[f64] {
        &self.curve
    }

    pub fn marker(&self) -> ResonancePoint {
        self.marker
    }

    pub fn label(&self) -> String {
        format!("f_res = {:.3} Hz", self.marker.frequency)
    }

    /// Label position, just below the marker.
    pub fn label_anchor(&self) -> (f64, f64) {
        (self.marker.frequency, self.marker.magnitude * 0.8)
    }

    pub fn c_range(&self) -> (f64, f64) {
        (self.cfg.c_min, self.cfg.c_max)
    }

    pub fn y_limits(&self) -> (f64, f64) {
        (0.0, self.cfg.y_max)
    }
}

/// Clamp to the range and round to the step grid anchored at `c_min`.
fn snap(cfg: &ExplorerConfig, c: f64) -> f64 {
    if c <= cfg.c_min {
        return cfg.c_min;
    }
    if c >= cfg.c_max {
        return cfg.c_max;
    }
    let k = ((c - cfg.c_min) / cfg.c_step).round();
    (cfg.c_min + k * cfg.c_step).clamp(cfg.c_min, cfg.c_max)
}
