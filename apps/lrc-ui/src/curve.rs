//! x-y curves and axis transforms shared by the study views.
//!
//! egui_plot has no logarithmic axes, so log-scaled views plot log10 of the
//! data and relabel the ticks with [`decade_label`].

use egui::Color32;
use egui_plot::{Line, PlotPoints};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisScale {
    #[default]
    Linear,
    Log10,
}

impl AxisScale {
    /// Plot coordinate of `value`; `None` when a log axis cannot show it.
    pub fn to_plot(self, value: f64) -> Option<f64> {
        match self {
            AxisScale::Linear => value.is_finite().then_some(value),
            AxisScale::Log10 => (value.is_finite() && value > 0.0).then(|| value.log10()),
        }
    }
}

/// Generic x-y curve data.
#[derive(Debug, Clone)]
pub struct CurveData {
    pub x_values: Vec<f64>,
    pub y_values: Vec<f64>,
    /// Legend entry
    pub label: String,
    pub color: Color32,
}

impl CurveData {
    pub fn new(label: impl Into<String>, x: &[f64], y: &[f64], color: Color32) -> Self {
        Self {
            x_values: x.to_vec(),
            y_values: y.to_vec(),
            label: label.into(),
            color,
        }
    }

    /// Points in plot coordinates; samples a log axis cannot show are dropped.
    pub fn points(&self, x_scale: AxisScale, y_scale: AxisScale) -> Vec<[f64; 2]> {
        self.x_values
            .iter()
            .zip(&self.y_values)
            .filter_map(|(&x, &y)| Some([x_scale.to_plot(x)?, y_scale.to_plot(y)?]))
            .collect()
    }

    pub fn line(&self, x_scale: AxisScale, y_scale: AxisScale) -> Line {
        Line::new(PlotPoints::from(self.points(x_scale, y_scale)))
            .name(&self.label)
            .color(self.color)
            .width(2.0)
    }
}

pub fn color32(rgb: (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Tick label for a log10 axis: the value at whole decades, blank between.
pub fn decade_label(exponent: f64) -> String {
    if (exponent - exponent.round()).abs() > 1e-9 {
        return String::new();
    }
    let value = 10f64.powi(exponent.round() as i32);
    if value < 1.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decade_labels() {
        assert_eq!(decade_label(-1.0), "0.1");
        assert_eq!(decade_label(0.0), "1");
        assert_eq!(decade_label(1.0), "10");
        assert_eq!(decade_label(2.0), "100");
        assert_eq!(decade_label(0.5), "");
    }

    #[test]
    fn log_axes_drop_non_positive_samples() {
        let curve = CurveData::new("z", &[0.0, 1.0, 10.0], &[5.0, 0.1, -7.0], Color32::BLUE);
        let pts = curve.points(AxisScale::Log10, AxisScale::Linear);
        assert_eq!(pts.len(), 2);
        assert!(pts[0][0].abs() < 1e-12);
        assert!((pts[1][0] - 1.0).abs() < 1e-12);

        let pts = curve.points(AxisScale::Log10, AxisScale::Log10);
        assert_eq!(pts, vec![[0.0, 0.1f64.log10()]]);
    }

    #[test]
    fn linear_axes_keep_every_finite_sample() {
        let curve = CurveData::new("i", &[0.0, 1.0, 2.0], &[0.0, f64::NAN, -1.0], Color32::RED);
        let pts = curve.points(AxisScale::Linear, AxisScale::Linear);
        assert_eq!(pts, vec![[0.0, 0.0], [2.0, -1.0]]);
    }
}
