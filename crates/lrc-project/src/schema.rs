//! Scenario schema definitions.

use lrc_core::{Grid, GridSpacing};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const SCENARIO_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub step: StepDef,
    #[serde(default)]
    pub sweep: SweepDef,
    #[serde(default)]
    pub am: AmDef,
    #[serde(default)]
    pub resonance: ResonanceDef,
    #[serde(default)]
    pub output: OutputDef,
}

fn default_version() -> u32 {
    SCENARIO_VERSION
}

fn default_name() -> String {
    "Series LRC".to_string()
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            version: SCENARIO_VERSION,
            name: default_name(),
            step: StepDef::default(),
            sweep: SweepDef::default(),
            am: AmDef::default(),
            resonance: ResonanceDef::default(),
            output: OutputDef::default(),
        }
    }
}

/// Step response study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StepDef {
    pub inductance_h: f64,
    pub capacitance_f: f64,
    pub resistances_ohm: Vec<f64>,
    pub step_voltage_v: f64,
    pub step_onset_s: f64,
    pub t_start_s: f64,
    pub t_end_s: f64,
    pub samples: usize,
    pub method: MethodDef,
}

impl Default for StepDef {
    fn default() -> Self {
        Self {
            inductance_h: 1.0,
            capacitance_f: 1.0,
            resistances_ohm: vec![0.5, 2.0, 4.0],
            step_voltage_v: 1.0,
            step_onset_s: 0.0,
            t_start_s: 0.0,
            t_end_s: 20.0,
            samples: 1000,
            method: MethodDef::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MethodDef {
    Rk45 { rtol: f64, atol: f64 },
    Rk4,
}

impl Default for MethodDef {
    fn default() -> Self {
        MethodDef::Rk45 {
            rtol: 1e-3,
            atol: 1e-6,
        }
    }
}

/// Frequency response study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SweepDef {
    pub inductance_h: f64,
    pub capacitance_f: f64,
    pub resistances_ohm: Vec<f64>,
    pub frequency: Grid,
}

impl Default for SweepDef {
    fn default() -> Self {
        Self {
            inductance_h: 1.0,
            capacitance_f: 1.0,
            resistances_ohm: vec![0.5, 2.0, 4.0],
            frequency: default_frequency_grid(),
        }
    }
}

/// 0.1 Hz to 10 Hz, 1000 log-spaced points.
pub fn default_frequency_grid() -> Grid {
    Grid {
        start: 0.1,
        end: 10.0,
        points: 1000,
        spacing: GridSpacing::Logarithmic,
    }
}

/// AM modulation and demodulation demo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AmDef {
    pub t_start_s: f64,
    pub t_end_s: f64,
    pub samples: usize,
    pub message_hz: f64,
    pub carrier_hz: f64,
    pub modulation_index: f64,
}

impl Default for AmDef {
    fn default() -> Self {
        Self {
            t_start_s: 0.0,
            t_end_s: 1.0,
            samples: 50_000,
            message_hz: 5.0,
            carrier_hz: 100.0,
            modulation_index: 0.8,
        }
    }
}

/// Interactive resonance explorer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResonanceDef {
    pub inductance_h: f64,
    pub resistance_ohm: f64,
    pub capacitance_min_f: f64,
    pub capacitance_max_f: f64,
    pub capacitance_step_f: f64,
    pub capacitance_init_f: f64,
    pub frequency: Grid,
    /// Fixed upper limit of the impedance axis
    pub impedance_max_ohm: f64,
}

impl Default for ResonanceDef {
    fn default() -> Self {
        Self {
            inductance_h: 1.0,
            resistance_ohm: 0.1,
            capacitance_min_f: 0.1,
            capacitance_max_f: 10.0,
            capacitance_step_f: 0.1,
            capacitance_init_f: 1.0,
            frequency: default_frequency_grid(),
            impedance_max_ohm: 70.0,
        }
    }
}

/// Where figures are written and at what resolution. Each figure keeps its
/// own size in inches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputDef {
    pub dir: PathBuf,
    pub dpi: u32,
}

impl Default for OutputDef {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            dpi: 300,
        }
    }
}
