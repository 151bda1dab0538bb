//! Shared figure sizing, fonts and line helpers.

use crate::error::{PlotError, PlotResult};
use plotters::prelude::*;
use std::path::Path;

pub const FONT: &str = "sans-serif";
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);

/// Every figure the studies write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Figure {
    StepResponse,
    FrequencyResponse,
    AmOverview,
    AmZoom,
    Resonance,
}

impl Figure {
    pub fn file_name(self) -> &'static str {
        match self {
            Figure::StepResponse => "figure_1.png",
            Figure::FrequencyResponse => "figure_2.png",
            Figure::AmOverview => "figure_3.png",
            Figure::AmZoom => "figure_3_zoom.png",
            Figure::Resonance => "figure_4.png",
        }
    }

    /// Width and height in inches.
    pub fn size_in(self) -> (f64, f64) {
        match self {
            Figure::StepResponse => (12.0, 8.0),
            Figure::AmOverview => (12.0, 10.0),
            Figure::FrequencyResponse | Figure::AmZoom | Figure::Resonance => (10.0, 6.0),
        }
    }
}

/// Pixel size of a figure. Fonts and strokes scale with the height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FigureStyle {
    pub width: u32,
    pub height: u32,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: 3600,
            height: 2400,
        }
    }
}

impl FigureStyle {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size of `figure` rendered at `dpi`.
    pub fn for_figure(figure: Figure, dpi: u32) -> Self {
        let (w, h) = figure.size_in();
        Self {
            width: (w * dpi as f64).round() as u32,
            height: (h * dpi as f64).round() as u32,
        }
    }

    fn unit(&self) -> f64 {
        self.height as f64 / 800.0
    }

    pub fn title_size(&self) -> u32 {
        (28.0 * self.unit()).round().max(8.0) as u32
    }

    pub fn label_size(&self) -> u32 {
        (20.0 * self.unit()).round().max(6.0) as u32
    }

    pub fn stroke(&self) -> u32 {
        (2.0 * self.unit()).round().max(1.0) as u32
    }

    pub fn margin(&self) -> u32 {
        (15.0 * self.unit()).round() as u32
    }

    pub fn x_label_area(&self) -> u32 {
        (60.0 * self.unit()).round() as u32
    }

    pub fn y_label_area(&self) -> u32 {
        (80.0 * self.unit()).round() as u32
    }
}

/// Make sure the parent directory of `path` exists.
pub(crate) fn prepare_target(path: &Path) -> PlotResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

pub(crate) fn require_points(len: usize, what: &'static str) -> PlotResult<()> {
    if len == 0 {
        Err(PlotError::EmptySeries { what })
    } else {
        Ok(())
    }
}

/// Dash segments along `[from, to]`.
///
/// With `log` set the segments are evenly spaced in log10 space so they look
/// regular on a logarithmic axis.
pub(crate) fn dash_segments(from: f64, to: f64, dashes: usize, log: bool) -> Vec<(f64, f64)> {
    let (a, b) = if log {
        (from.log10(), to.log10())
    } else {
        (from, to)
    };
    let period = (b - a) / dashes as f64;
    (0..dashes)
        .map(|i| {
            let s = a + i as f64 * period;
            let e = s + 0.6 * period;
            if log {
                (10f64.powf(s), 10f64.powf(e))
            } else {
                (s, e)
            }
        })
        .collect()
}

/// Break a polyline into dashes of `dash` length along x, dropping every
/// other piece.
pub(crate) fn dashed_path(points: &[(f64, f64)], dash: f64) -> Vec<Vec<(f64, f64)>> {
    let Some(&(x0, _)) = points.first() else {
        return Vec::new();
    };
    let mut pieces = Vec::new();
    let mut current = Vec::new();
    for &(x, y) in points {
        let visible = ((x - x0) / dash).floor() as i64 % 2 == 0;
        if visible {
            current.push((x, y));
        } else if !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

/// Padded y limits of the finite values in `values`.
pub(crate) fn padded_range<'a>(values: impl IntoIterator<Item = &'a f64>) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if !lo.is_finite() {
        return (-1.0, 1.0);
    }
    let pad = ((hi - lo) * 0.1).max(1e-3);
    (lo - pad, hi + pad)
}
