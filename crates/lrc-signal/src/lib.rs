//! Amplitude modulation and envelope recovery.
//!
//! Provides:
//! - Sinusoidal message tones and AM modulation onto a carrier
//! - Analytic signal via FFT (Hilbert transform)
//! - Envelope detector with DC removal and peak rescaling
//! - Correlation helpers for comparing recovered and original signals

pub mod am;
pub mod error;
pub mod hilbert;
pub mod stats;

pub use am::{AmConfig, AmDemo, EnvelopeDetector, am_demo, am_modulate, message_tone};
pub use error::{SignalError, SignalResult};
pub use hilbert::{HilbertTransformer, analytic_signal, envelope};
pub use stats::{normalized_cross_correlation, trim_edges};
