//! AM demonstration figures: the three-panel overview and the carrier zoom.

use crate::error::{PlotResult, backend};
use crate::style::{
    FONT, FigureStyle, dashed_path, padded_range, prepare_target, require_points,
};
use lrc_signal::AmDemo;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Seconds shown in the overview panels.
pub const OVERVIEW_WINDOW: f64 = 0.5;
/// Seconds shown in the zoomed carrier view.
pub const ZOOM_WINDOW: f64 = 0.05;

struct Trace<'a> {
    values: &'a [f64],
    color: RGBColor,
    label: Option<&'static str>,
    dashed: bool,
}

/// Samples within `window` seconds of the first time point.
pub fn windowed(t: &[f64], values: &[f64], window: f64) -> Vec<(f64, f64)> {
    let Some(&x0) = t.first() else {
        return Vec::new();
    };
    let x_max = x0 + window;
    t.iter()
        .copied()
        .zip(values.iter().copied())
        .take_while(|&(t, _)| t <= x_max)
        .collect()
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    (title, title_size): (&str, u32),
    t: &[f64],
    window: f64,
    traces: &[Trace<'_>],
    x_desc: Option<&str>,
    style: FigureStyle,
) -> PlotResult<()> {
    let x0 = t[0];
    let x_max = x0 + window;
    let visible: Vec<Vec<(f64, f64)>> = traces
        .iter()
        .map(|tr| windowed(t, tr.values, window))
        .collect();
    let (y0, y1) = padded_range(visible.iter().flatten().map(|(_, y)| y));
    let stroke = style.stroke();

    let mut chart = ChartBuilder::on(area)
        .caption(title, (FONT, title_size))
        .margin(style.margin())
        .x_label_area_size(style.x_label_area())
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d(x0..x_max, y0..y1)
        .map_err(backend)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.y_desc("Amplitude")
            .label_style((FONT, style.label_size()))
            .light_line_style(BLACK.mix(0.05));
        if let Some(desc) = x_desc {
            mesh.x_desc(desc);
        }
        mesh.draw().map_err(backend)?;
    }

    let mut labelled = false;
    for (trace, points) in traces.iter().zip(&visible) {
        let line = trace.color.stroke_width(stroke);
        let annotation = if trace.dashed {
            let dash = (x_max - x0) / 80.0;
            chart
                .draw_series(
                    dashed_path(points, dash)
                        .into_iter()
                        .map(|piece| PathElement::new(piece, line)),
                )
                .map_err(backend)?
        } else {
            chart
                .draw_series(LineSeries::new(points.iter().copied(), line))
                .map_err(backend)?
        };
        if let Some(label) = trace.label {
            annotation
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line));
            labelled = true;
        }
    }

    if labelled {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font((FONT, style.label_size()))
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(backend)?;
    }
    Ok(())
}

fn check(demo: &AmDemo) -> PlotResult<()> {
    require_points(demo.t.len(), "time grid")?;
    require_points(demo.message.len(), "message")?;
    require_points(demo.modulated.len(), "modulated signal")?;
    require_points(demo.demodulated.len(), "demodulated signal")
}

/// Message, modulated signal, and demodulated envelope against the message.
pub fn render_am(demo: &AmDemo, path: &Path, style: FigureStyle) -> PlotResult<()> {
    check(demo)?;
    prepare_target(path)?;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    let panels = root.split_evenly((3, 1));
    let panel_title = style.label_size();

    draw_panel(
        &panels[0],
        (
            format!("Message Signal ({} Hz)", demo.message_hz).as_str(),
            panel_title,
        ),
        &demo.t,
        OVERVIEW_WINDOW,
        &[Trace {
            values: &demo.message,
            color: BLUE,
            label: None,
            dashed: false,
        }],
        None,
        style,
    )?;
    draw_panel(
        &panels[1],
        (
            format!("Amplitude Modulated Signal ({} Hz carrier)", demo.carrier_hz).as_str(),
            panel_title,
        ),
        &demo.t,
        OVERVIEW_WINDOW,
        &[Trace {
            values: &demo.modulated,
            color: GREEN,
            label: None,
            dashed: false,
        }],
        None,
        style,
    )?;
    draw_panel(
        &panels[2],
        ("Demodulated Signal vs Original Message", panel_title),
        &demo.t,
        OVERVIEW_WINDOW,
        &[
            Trace {
                values: &demo.demodulated,
                color: RED,
                label: Some("Demodulated"),
                dashed: false,
            },
            Trace {
                values: &demo.message,
                color: BLUE,
                label: Some("Original Message"),
                dashed: true,
            },
        ],
        Some("Time (s)"),
        style,
    )?;

    root.present().map_err(backend)?;
    tracing::debug!(path = %path.display(), "wrote AM overview figure");
    Ok(())
}

/// First few carrier cycles of the modulated signal.
pub fn render_am_zoom(demo: &AmDemo, path: &Path, style: FigureStyle) -> PlotResult<()> {
    check(demo)?;
    prepare_target(path)?;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;
    draw_panel(
        &root,
        ("Zoomed View of AM Signal", style.title_size()),
        &demo.t,
        ZOOM_WINDOW,
        &[Trace {
            values: &demo.modulated,
            color: GREEN,
            label: None,
            dashed: false,
        }],
        Some("Time (s)"),
        style,
    )?;

    root.present().map_err(backend)?;
    tracing::debug!(path = %path.display(), "wrote AM zoom figure");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_stops_at_limit() {
        let t = [0.0, 0.1, 0.2, 0.3];
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(windowed(&t, &v, 0.2), vec![(0.0, 1.0), (0.1, 2.0), (0.2, 3.0)]);
    }

    #[test]
    fn window_starts_at_first_sample() {
        let t: Vec<f64> = (0..40).map(|i| 1.0 + 0.025 * i as f64).collect();
        let v: Vec<f64> = t.iter().map(|x| x.sin()).collect();
        let points = windowed(&t, &v, 0.49);
        assert_eq!(points.len(), 20);
        assert_eq!(points[0], (1.0, 1.0f64.sin()));
        assert!(points.iter().all(|&(x, _)| x < 1.49));
        assert!(windowed(&[], &[], OVERVIEW_WINDOW).is_empty());
    }

    #[test]
    fn empty_demo_is_rejected() {
        let demo = AmDemo {
            message_hz: 5.0,
            carrier_hz: 100.0,
            t: vec![],
            message: vec![],
            modulated: vec![],
            demodulated: vec![],
        };
        let path = std::env::temp_dir().join("lrc-plot-never-written.png");
        assert!(render_am(&demo, &path, FigureStyle::new(64, 64)).is_err());
        assert!(!path.exists());
    }
}
