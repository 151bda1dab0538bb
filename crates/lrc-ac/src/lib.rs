//! Frequency-domain analysis of a series LRC circuit.
//!
//! Provides:
//! - Complex series impedance `R + j w L + 1 / (j w C)`
//! - Impedance magnitude sweeps over a frequency grid
//! - Closed-form resonance and grid minimum location
//! - Resonance explorer state for slider-driven displays

pub mod error;
pub mod explorer;
pub mod impedance;
pub mod sweep;

pub use error::{AcError, AcResult};
pub use explorer::{ExplorerConfig, ResonanceExplorer};
pub use impedance::{
    SeriesLrcParams, frequency_response, impedance_magnitude, resonant_frequency,
    series_impedance,
};
pub use sweep::{ImpedanceCurve, ResonancePoint, SweepConfig, SweepResult, resonance_point, sweep};
