//! Comparison helpers for sampled signals.

use crate::error::{SignalError, SignalResult};

/// Zero-lag normalized cross-correlation (Pearson coefficient).
///
/// Returns a value in `[-1, 1]`; 1 means identical up to offset and
/// positive scale. A constant input has no defined correlation and is
/// reported as an error.
pub fn normalized_cross_correlation(a: &[f64], b: &[f64]) -> SignalResult<f64> {
    if a.len() != b.len() {
        return Err(SignalError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(SignalError::Empty {
            what: "correlation input",
        });
    }

    let n = a.len() as f64;
    let mean_a = a.iter().sum::<f64>() / n;
    let mean_b = b.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (x, y) in a.iter().zip(b) {
        let da = x - mean_a;
        let db = y - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    let denom = (var_a * var_b).sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return Err(SignalError::InvalidArg {
            what: "correlation of a constant signal",
        });
    }
    Ok((cov / denom).clamp(-1.0, 1.0))
}

/// Drop `fraction` of the samples from each end.
pub fn trim_edges(x: &[f64], fraction: f64) -> SignalResult<&[f64]> {
    if !(0.0..0.5).contains(&fraction) {
        return Err(SignalError::InvalidArg {
            what: "edge fraction must be in [0, 0.5)",
        });
    }
    let cut = (x.len() as f64 * fraction).floor() as usize;
    Ok(&x[cut..x.len() - cut])
}
