//! Evaluation grid generation.
//!
//! Time and frequency axes are fixed, ordered sample sets that live for one
//! computation. Both end points are always part of the grid.

use crate::error::{LrcError, LrcResult};
use crate::numeric::{Real, ensure_finite};
use std::fmt;

/// Type of grid progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GridSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Definition of an evaluation grid.
///
/// `start` and `end` are stored in the axis unit (seconds, hertz) for both
/// spacings; a logarithmic grid is generated uniformly in log10 space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    pub start: Real,
    pub end: Real,
    pub points: usize,
    pub spacing: GridSpacing,
}

impl Grid {
    /// Uniform grid over `[start, end]`, end point included.
    pub fn linspace(start: Real, end: Real, points: usize) -> LrcResult<Self> {
        let grid = Self {
            start,
            end,
            points,
            spacing: GridSpacing::Linear,
        };
        grid.validate()?;
        Ok(grid)
    }

    /// `points` samples from `10^start_exp` to `10^end_exp`.
    pub fn logspace(start_exp: Real, end_exp: Real, points: usize) -> LrcResult<Self> {
        let grid = Self {
            start: Real::powf(10.0, start_exp),
            end: Real::powf(10.0, end_exp),
            points,
            spacing: GridSpacing::Logarithmic,
        };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> LrcResult<()> {
        ensure_finite(self.start, "grid start")?;
        ensure_finite(self.end, "grid end")?;
        if self.points < 2 {
            return Err(LrcError::InvalidArg {
                what: "grid must have at least 2 points",
            });
        }
        if self.end <= self.start {
            return Err(LrcError::InvalidArg {
                what: "grid end must be greater than start",
            });
        }
        if self.spacing == GridSpacing::Logarithmic && self.start <= 0.0 {
            return Err(LrcError::NonPositive {
                what: "logarithmic grid start",
                value: self.start,
            });
        }
        Ok(())
    }

    /// Distance between neighbouring samples of a linear grid, or the ratio
    /// between neighbours of a logarithmic one.
    pub fn step(&self) -> Real {
        let n = (self.points - 1) as Real;
        match self.spacing {
            GridSpacing::Linear => (self.end - self.start) / n,
            GridSpacing::Logarithmic => Real::powf(self.end / self.start, 1.0 / n),
        }
    }

    /// Sample rate implied by a linear grid.
    pub fn sample_rate(&self) -> Option<Real> {
        match self.spacing {
            GridSpacing::Linear => Some(1.0 / self.step()),
            GridSpacing::Logarithmic => None,
        }
    }

    /// Generate all points of the grid.
    pub fn generate(&self) -> Vec<Real> {
        match self.spacing {
            GridSpacing::Linear => self.generate_linear(),
            GridSpacing::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<Real> {
        let mut points = Vec::with_capacity(self.points);
        let delta = (self.end - self.start) / (self.points - 1) as Real;

        for i in 0..self.points {
            points.push(self.start + i as Real * delta);
        }

        // Ensure exact endpoint
        points[self.points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<Real> {
        let mut points = Vec::with_capacity(self.points);
        let log_start = self.start.log10();
        let log_end = self.end.log10();
        let log_delta = (log_end - log_start) / (self.points - 1) as Real;

        for i in 0..self.points {
            points.push(Real::powf(10.0, log_start + i as Real * log_delta));
        }

        points[0] = self.start;
        points[self.points - 1] = self.end;
        points
    }
}

impl fmt::Display for GridSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid from {} to {} ({} points, {})",
            self.start, self.end, self.points, self.spacing
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn grids_are_strictly_increasing(
            start in -3.0_f64..0.0,
            span in 0.5_f64..4.0,
            points in 2_usize..400,
            log in any::<bool>(),
        ) {
            let grid = if log {
                Grid::logspace(start, start + span, points).unwrap()
            } else {
                Grid::linspace(start, start + span, points).unwrap()
            };
            let values = grid.generate();
            prop_assert_eq!(values.len(), points);
            prop_assert_eq!(values[0], grid.start);
            prop_assert_eq!(values[points - 1], grid.end);
            for w in values.windows(2) {
                prop_assert!(w[1] > w[0]);
            }
        }
    }
}
