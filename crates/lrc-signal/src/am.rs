//! Amplitude modulation demo: tone, modulation and envelope recovery.

use crate::error::{SignalError, SignalResult};
use crate::hilbert::HilbertTransformer;
use lrc_core::{Grid, max_abs, mean};
use std::f64::consts::PI;

/// `sin(2 pi f t)` sampled at `t`.
pub fn message_tone(t: &[f64], freq_hz: f64) -> Vec<f64> {
    t.iter().map(|&ti| (2.0 * PI * freq_hz * ti).sin()).collect()
}

/// `(1 + index * m(t)) * sin(2 pi f_c t)`.
pub fn am_modulate(
    message: &[f64],
    t: &[f64],
    carrier_hz: f64,
    modulation_index: f64,
) -> SignalResult<Vec<f64>> {
    if message.len() != t.len() {
        return Err(SignalError::LengthMismatch {
            left: message.len(),
            right: t.len(),
        });
    }
    if !modulation_index.is_finite() {
        return Err(SignalError::InvalidArg {
            what: "modulation index must be finite",
        });
    }
    Ok(message
        .iter()
        .zip(t)
        .map(|(&m, &ti)| (1.0 + modulation_index * m) * (2.0 * PI * carrier_hz * ti).sin())
        .collect())
}

/// Envelope detector built on the analytic signal.
///
/// The envelope has its mean removed and is rescaled so its peak matches the
/// peak of the modulated input.
#[derive(Default)]
pub struct EnvelopeDetector {
    hilbert: HilbertTransformer,
}

impl EnvelopeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn detect(&mut self, modulated: &[f64]) -> SignalResult<Vec<f64>> {
        let env = self.hilbert.envelope(modulated)?;
        let dc = mean(&env).ok_or(SignalError::Empty {
            what: "envelope detector input",
        })?;
        let centered: Vec<f64> = env.iter().map(|e| e - dc).collect();

        let peak = max_abs(&centered);
        if peak == 0.0 {
            // Unmodulated carrier: nothing left after DC removal.
            return Ok(centered);
        }
        let scale = max_abs(modulated) / peak;
        Ok(centered.iter().map(|e| e * scale).collect())
    }
}

/// Inputs for the AM demo.
#[derive(Clone, Debug)]
pub struct AmConfig {
    /// Time axis (seconds)
    pub grid: Grid,
    pub message_hz: f64,
    pub carrier_hz: f64,
    pub modulation_index: f64,
}

impl Default for AmConfig {
    fn default() -> Self {
        Self {
            grid: Grid {
                start: 0.0,
                end: 1.0,
                points: 50_000,
                spacing: lrc_core::GridSpacing::Linear,
            },
            message_hz: 5.0,
            carrier_hz: 100.0,
            modulation_index: 0.8,
        }
    }
}

/// Three aligned series of the AM demo.
#[derive(Clone, Debug)]
pub struct AmDemo {
    pub message_hz: f64,
    pub carrier_hz: f64,
    pub t: Vec<f64>,
    pub message: Vec<f64>,
    pub modulated: Vec<f64>,
    pub demodulated: Vec<f64>,
}

/// Synthesize, modulate and demodulate.
pub fn am_demo(cfg: &AmConfig) -> SignalResult<AmDemo> {
    cfg.grid.validate()?;
    for (v, what) in [
        (cfg.message_hz, "message frequency must be finite"),
        (cfg.carrier_hz, "carrier frequency must be finite"),
    ] {
        if !v.is_finite() {
            return Err(SignalError::InvalidArg { what });
        }
    }

    let t = cfg.grid.generate();
    let message = message_tone(&t, cfg.message_hz);
    let modulated = am_modulate(&message, &t, cfg.carrier_hz, cfg.modulation_index)?;
    let demodulated = EnvelopeDetector::new().detect(&modulated)?;

    Ok(AmDemo {
        message_hz: cfg.message_hz,
        carrier_hz: cfg.carrier_hz,
        t,
        message,
        modulated,
        demodulated,
    })
}
