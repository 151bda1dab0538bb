//! Transient current figure.

use crate::error::{PlotResult, backend};
use crate::style::{FONT, FigureStyle, dash_segments, prepare_target, require_points};
use lrc_sim::{CurrentTrace, Damping, StepResponse};
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use std::path::Path;

/// Visible current window (A).
pub const Y_RANGE: (f64, f64) = (-0.6, 1.5);

pub fn trace_color(damping: Damping) -> RGBColor {
    match damping {
        Damping::Underdamped => BLUE,
        Damping::CriticallyDamped => RED,
        Damping::Overdamped => GREEN,
    }
}

/// Legend entry for one resistance.
pub fn trace_label(trace: &CurrentTrace) -> String {
    format!("{} (R={})", trace.damping.label(), trace.resistance)
}

/// Text label with a leader line pointing at `target`.
pub struct Callout {
    pub text: &'static str,
    pub target: (f64, f64),
    pub anchor: (f64, f64),
    pub color: RGBColor,
}

/// Annotations placed in (time, current) coordinates.
pub const CALLOUTS: [Callout; 2] = [
    Callout {
        text: "Oscillations",
        target: (5.0, 0.8),
        anchor: (5.0, 0.4),
        color: BLUE,
    },
    Callout {
        text: "No overshoot",
        target: (3.0, 0.6),
        anchor: (5.0, 0.2),
        color: GREEN,
    },
];

/// One line per resistance, labelled for the legend. Draws no text.
fn draw_traces<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    response: &StepResponse,
    stroke: u32,
) -> PlotResult<()> {
    for trace in &response.traces {
        let line = trace_color(trace.damping).stroke_width(stroke);
        chart
            .draw_series(LineSeries::new(
                response.t.iter().copied().zip(trace.current.iter().copied()),
                line,
            ))
            .map_err(backend)?
            .label(trace_label(trace))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));
    }

    Ok(())
}

/// Current against time for every resistance, with the steady-state level
/// dashed.
pub fn render_step_response(
    response: &StepResponse,
    path: &Path,
    style: FigureStyle,
) -> PlotResult<()> {
    require_points(response.t.len(), "time grid")?;
    require_points(response.traces.len(), "current traces")?;
    prepare_target(path)?;

    let t0 = response.t[0];
    let t1 = response.t[response.t.len() - 1];
    let stroke = style.stroke();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Step Response of Series LRC Circuit",
            (FONT, style.title_size()),
        )
        .margin(style.margin())
        .x_label_area_size(style.x_label_area())
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d(t0..t1, Y_RANGE.0..Y_RANGE.1)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .y_desc("Current (A)")
        .label_style((FONT, style.label_size()))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(backend)?;

    draw_traces(&mut chart, response, stroke)?;

    let level = response.steady_state;
    let dashed = BLACK.mix(0.5).stroke_width(stroke);
    chart
        .draw_series(
            dash_segments(t0, t1, 60, false)
                .into_iter()
                .map(|(a, b)| PathElement::new(vec![(a, level), (b, level)], dashed)),
        )
        .map_err(backend)?
        .label(format!("Steady-state ({level:.1} A)"))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], dashed));

    for callout in CALLOUTS.iter().filter(|c| c.anchor.0 < t1) {
        let leader = callout.color.stroke_width(stroke);
        chart
            .draw_series([
                PathElement::new(vec![callout.anchor, callout.target], leader),
            ])
            .map_err(backend)?;
        chart
            .draw_series([Circle::new(callout.target, stroke * 2, callout.color.filled())])
            .map_err(backend)?;
        chart
            .draw_series([Text::new(
                callout.text,
                callout.anchor,
                (FONT, style.label_size()).into_font().color(&callout.color),
            )])
            .map_err(backend)?;
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
    tracing::debug!(path = %path.display(), "wrote step response figure");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrc_sim::{StepResponseConfig, step_response};

    const W: u32 = 240;
    const H: u32 = 160;

    /// True when some pixel is dominated by one RGB channel.
    fn has_tint(buf: &[u8], channel: usize) -> bool {
        buf.chunks_exact(3).any(|px| {
            (0..3).all(|c| if c == channel { px[c] > 200 } else { px[c] < 128 })
        })
    }

    #[test]
    fn traces_reach_the_bitmap() {
        let cfg = StepResponseConfig {
            samples: 200,
            ..StepResponseConfig::default()
        };
        let response = step_response(&cfg).unwrap();
        let t1 = response.t[response.t.len() - 1];
        let mut buf = vec![0u8; (W * H * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (W, H)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let mut chart = ChartBuilder::on(&root)
                .build_cartesian_2d(response.t[0]..t1, Y_RANGE.0..Y_RANGE.1)
                .unwrap();
            draw_traces(&mut chart, &response, 3).unwrap();
            root.present().unwrap();
        }
        // red, green, blue
        for channel in 0..3 {
            assert!(has_tint(&buf, channel), "no trace in channel {channel}");
        }
        assert!(buf.chunks_exact(3).any(|px| *px == [255, 255, 255]));
    }
}
