//! Snapshot of the resonance explorer at its current capacitance.

use crate::error::{PlotResult, backend};
use crate::style::{FONT, FigureStyle, prepare_target, require_points};
use lrc_ac::ResonanceExplorer;
use plotters::prelude::*;
use std::path::Path;

/// Rough advance of one glyph relative to the font size.
const GLYPH_WIDTH: f64 = 0.55;

pub fn render_resonance(
    explorer: &ResonanceExplorer,
    path: &Path,
    style: FigureStyle,
) -> PlotResult<()> {
    let freqs = explorer.freqs();
    let curve = explorer.curve();
    require_points(freqs.len(), "frequency grid")?;
    prepare_target(path)?;

    let (y0, y1) = explorer.y_limits();
    let f0 = freqs[0];
    let f1 = freqs[freqs.len() - 1];
    let stroke = style.stroke();

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("LRC Circuit Frequency Response", (FONT, style.title_size()))
        .margin(style.margin())
        .x_label_area_size(style.x_label_area())
        .y_label_area_size(style.y_label_area())
        .build_cartesian_2d((f0..f1).log_scale(), y0..y1)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Impedance (Ω)")
        .label_style((FONT, style.label_size()))
        .light_line_style(BLACK.mix(0.05))
        .draw()
        .map_err(backend)?;

    chart
        .draw_series(LineSeries::new(
            freqs.iter().copied().zip(curve.iter().copied()),
            BLUE.stroke_width(stroke),
        ))
        .map_err(backend)?
        .label(format!("C = {:.1} F", explorer.capacitance()))
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(stroke))
        });

    let marker = explorer.marker();
    chart
        .draw_series([Circle::new(
            (marker.frequency, marker.magnitude),
            stroke * 4,
            RED.filled(),
        )])
        .map_err(backend)?;

    // Centered horizontally on the anchor, sitting on top of it.
    let label = explorer.label();
    let size = style.label_size() as i32;
    let half_width = (label.chars().count() as f64 * size as f64 * GLYPH_WIDTH / 2.0) as i32;
    let font = (FONT, style.label_size()).into_font().color(&RED);
    chart
        .draw_series([EmptyElement::at(explorer.label_anchor())
            + Rectangle::new(
                [(-half_width - 4, -size - 4), (half_width + 4, 2)],
                WHITE.mix(0.7).filled(),
            )
            + Text::new(label, (-half_width, -size), font)])
        .map_err(backend)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, style.label_size()))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(backend)?;

    root.present().map_err(backend)?;
    tracing::debug!(
        path = %path.display(),
        capacitance = explorer.capacitance(),
        "wrote resonance figure"
    );
    Ok(())
}
