use crate::LrcError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, LrcError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(LrcError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, LrcError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(LrcError::NonPositive { what, value: v })
    }
}

pub fn ensure_same_len(expected: usize, actual: usize, what: &'static str) -> Result<(), LrcError> {
    if expected == actual {
        Ok(())
    } else {
        Err(LrcError::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Index and value of the smallest finite sample.
pub fn argmin(values: &[Real]) -> Option<(usize, Real)> {
    values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

/// Largest absolute value, zero for an empty slice.
pub fn max_abs(values: &[Real]) -> Real {
    values.iter().fold(0.0, |acc: Real, v| acc.max(v.abs()))
}

pub fn mean(values: &[Real]) -> Option<Real> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<Real>() / values.len() as Real)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(1e-9, "inductance").is_ok());
        assert_eq!(
            ensure_positive(0.0, "inductance"),
            Err(LrcError::NonPositive {
                what: "inductance",
                value: 0.0
            })
        );
        assert!(ensure_positive(-1.0, "inductance").is_err());
        assert!(ensure_positive(Real::INFINITY, "inductance").is_err());
    }

    #[test]
    fn argmin_skips_nan() {
        let v = [3.0, Real::NAN, 1.5, 2.0];
        assert_eq!(argmin(&v), Some((2, 1.5)));
        assert_eq!(argmin(&[]), None);
    }

    #[test]
    fn max_abs_and_mean() {
        assert_eq!(max_abs(&[-4.0, 2.0, 3.5]), 4.0);
        assert_eq!(max_abs(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
    }
}
