//! Analytic signal through the FFT.
//!
//! The spectrum of a real signal is multiplied by the step
//! `h = [1, 2, .., 2, (1), 0, .., 0]` (DC and, for even lengths, the Nyquist
//! bin kept once, positive frequencies doubled, negative ones removed) and
//! transformed back. The real part of the result is the input, the imaginary
//! part its Hilbert transform.

use crate::error::{SignalError, SignalResult};
use num_complex::Complex64;
use rustfft::FftPlanner;

/// FFT-backed Hilbert transformer with a cached planner.
pub struct HilbertTransformer {
    planner: FftPlanner<f64>,
}

impl Default for HilbertTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl HilbertTransformer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Analytic signal of `x`. Any length is accepted.
    pub fn analytic(&mut self, x: &[f64]) -> SignalResult<Vec<Complex64>> {
        let n = x.len();
        if n == 0 {
            return Err(SignalError::Empty {
                what: "analytic signal input",
            });
        }

        let mut buf: Vec<Complex64> = x.iter().map(|&v| Complex64::new(v, 0.0)).collect();
        self.planner.plan_fft_forward(n).process(&mut buf);

        let half = n / 2;
        for (k, bin) in buf.iter_mut().enumerate() {
            let weight = if k == 0 || (n % 2 == 0 && k == half) {
                1.0
            } else if k < n.div_ceil(2) {
                2.0
            } else {
                0.0
            };
            *bin *= weight;
        }

        self.planner.plan_fft_inverse(n).process(&mut buf);

        // rustfft leaves the inverse unnormalized
        let scale = 1.0 / n as f64;
        for v in &mut buf {
            *v *= scale;
        }
        Ok(buf)
    }

    /// Instantaneous amplitude `|x + j H{x}|`.
    pub fn envelope(&mut self, x: &[f64]) -> SignalResult<Vec<f64>> {
        Ok(self.analytic(x)?.iter().map(|z| z.norm()).collect())
    }
}

/// One-shot analytic signal.
pub fn analytic_signal(x: &[f64]) -> SignalResult<Vec<Complex64>> {
    HilbertTransformer::new().analytic(x)
}

/// One-shot envelope.
pub fn envelope(x: &[f64]) -> SignalResult<Vec<f64>> {
    HilbertTransformer::new().envelope(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn tone(n: usize, cycles: f64, phase: f64) -> Vec<f64> {
        (0..n)
            .map(|i| (2.0 * PI * cycles * i as f64 / n as f64 + phase).cos())
            .collect()
    }

    #[test]
    fn real_part_reproduces_input() {
        for n in [8, 9, 100, 101] {
            let x = tone(n, 3.0, 0.3);
            let z = analytic_signal(&x).unwrap();
            for (a, b) in x.iter().zip(&z) {
                assert!((a - b.re).abs() < 1e-12, "n={n}");
            }
        }
    }

    #[test]
    fn cosine_becomes_sine_in_quadrature() {
        let n = 256;
        let x = tone(n, 5.0, 0.0);
        let z = analytic_signal(&x).unwrap();
        for (i, v) in z.iter().enumerate() {
            let expected = (2.0 * PI * 5.0 * i as f64 / n as f64).sin();
            assert!((v.im - expected).abs() < 1e-10);
        }
    }

    #[test]
    fn envelope_of_periodic_tone_is_flat() {
        let x: Vec<f64> = tone(1000, 20.0, 1.0).iter().map(|v| 2.5 * v).collect();
        let env = envelope(&x).unwrap();
        for e in env {
            assert!((e - 2.5).abs() < 1e-9);
        }
    }

    #[test]
    fn constant_signal_keeps_dc() {
        let env = envelope(&[3.0; 7]).unwrap();
        for e in env {
            assert!((e - 3.0).abs() < 1e-12);
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            analytic_signal(&[]),
            Err(SignalError::Empty { .. })
        ));
    }

    #[test]
    fn transformer_can_be_reused_across_lengths() {
        let mut h = HilbertTransformer::new();
        assert_eq!(h.envelope(&tone(64, 4.0, 0.0)).unwrap().len(), 64);
        assert_eq!(h.envelope(&tone(65, 4.0, 0.0)).unwrap().len(), 65);
        assert_eq!(h.envelope(&tone(64, 4.0, 0.0)).unwrap().len(), 64);
    }
}
