//! Impedance magnitude against frequency on log-log axes.

use crate::error::{PlotResult, backend};
use crate::style::{FONT, FigureStyle, ORANGE, dash_segments, prepare_target, require_points};
use lrc_ac::{ImpedanceCurve, SweepResult};
use lrc_sim::{Damping, classify};
use plotters::prelude::*;
use std::path::Path;

/// Visible frequency window (Hz).
pub const X_RANGE: (f64, f64) = (0.1, 10.0);
/// Visible impedance window (ohm).
pub const Y_RANGE: (f64, f64) = (0.4, 100.0);
const PALETTE: [RGBColor; 3] = [BLUE, ORANGE, GREEN];

pub fn curve_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Legend entry: damping regime and resistance.
pub fn curve_label(sweep: &SweepResult, curve: &ImpedanceCurve) -> String {
    format!(
        "{} R={} Ω",
        curve_name(classify(sweep.inductance, curve.resistance, sweep.capacitance)),
        curve.resistance
    )
}

fn curve_name(damping: Damping) -> &'static str {
    match damping {
        Damping::Underdamped => "Underdamped",
        Damping::CriticallyDamped => "Critical damped",
        Damping::Overdamped => "Overdamped",
    }
}

pub fn render_frequency_response(
    sweep: &SweepResult,
    path: &Path,
    style: FigureStyle,
) -> PlotResult<()> {
    require_points(sweep.freqs.len(), "frequency grid")?;
    require_points(sweep.curves.len(), "impedance curves")?;
    prepare_target(path)?;

    let stroke = style.stroke();
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Frequency Response of Series LRC Circuit",
            (FONT, style.title_size()),
        )
        .margin(style.margin())
        .x_label_area_size(style.x_label_area())
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d(
            (X_RANGE.0..X_RANGE.1).log_scale(),
            (Y_RANGE.0..Y_RANGE.1).log_scale(),
        )
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Impedance (Ω)")
        .label_style((FONT, style.label_size()))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(backend)?;

    for (i, curve) in sweep.curves.iter().enumerate() {
        let line = curve_color(i).stroke_width(stroke);
        // Values outside the visible window are clipped by the log axis.
        let points = sweep
            .freqs
            .iter()
            .copied()
            .zip(curve.magnitude.iter().copied())
            .filter(|&(_, z)| z > 0.0);
        chart
            .draw_series(LineSeries::new(points, line))
            .map_err(backend)?
            .label(curve_label(sweep, curve))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));
    }

    let f_res = sweep.resonant_hz;
    if (X_RANGE.0..=X_RANGE.1).contains(&f_res) {
        let dashed = RED.stroke_width(stroke);
        chart
            .draw_series(
                dash_segments(Y_RANGE.0, Y_RANGE.1, 30, true)
                    .into_iter()
                    .map(|(a, b)| PathElement::new(vec![(f_res, a), (f_res, b)], dashed)),
            )
            .map_err(backend)?
            .label(format!("Resonant frequency: {f_res:.3} Hz"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], dashed));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, style.label_size()))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend)?;

    root.present().map_err(backend)?;
    tracing::debug!(path = %path.display(), "wrote frequency response figure");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sweep_names_each_regime() {
        let names: Vec<_> = [0.5, 2.0, 4.0]
            .into_iter()
            .map(|r| curve_name(classify(1.0, r, 1.0)))
            .collect();
        assert_eq!(names, ["Underdamped", "Critical damped", "Overdamped"]);
    }
}
