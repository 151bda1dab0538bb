use egui::Color32;
use egui_plot::{GridMark, Legend, LineStyle, Plot, PlotBounds, VLine};
use lrc_ac::SweepResult;
use lrc_plot::frequency::{X_RANGE, Y_RANGE, curve_color, curve_label};

use crate::curve::{AxisScale, CurveData, color32, decade_label};

/// Impedance magnitude on log-log axes.
pub struct SweepView {
    result: SweepResult,
    curves: Vec<CurveData>,
}

impl SweepView {
    pub fn new(result: SweepResult) -> Self {
        let curves = result
            .curves
            .iter()
            .enumerate()
            .map(|(i, curve)| {
                let c = curve_color(i);
                CurveData::new(
                    curve_label(&result, curve),
                    &result.freqs,
                    &curve.magnitude,
                    color32((c.0, c.1, c.2)),
                )
            })
            .collect();
        Self { result, curves }
    }

    pub fn result(&self) -> &SweepResult {
        &self.result
    }

    pub fn curves(&self) -> &[CurveData] {
        &self.curves
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.heading("Frequency Response of Series LRC Circuit");
        let f_res = self.result.resonant_hz;

        Plot::new("sweep_plot")
            .legend(Legend::default())
            .x_axis_label("Frequency (Hz)")
            .y_axis_label("Impedance (Ω)")
            .x_axis_formatter(|mark: GridMark, _range| decade_label(mark.value))
            .y_axis_formatter(|mark: GridMark, _range| decade_label(mark.value))
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [X_RANGE.0.log10(), Y_RANGE.0.log10()],
                    [X_RANGE.1.log10(), Y_RANGE.1.log10()],
                ));
                for curve in &self.curves {
                    plot_ui.line(curve.line(AxisScale::Log10, AxisScale::Log10));
                }
                if let Some(x) = AxisScale::Log10.to_plot(f_res) {
                    plot_ui.vline(
                        VLine::new(x)
                            .color(Color32::RED)
                            .style(LineStyle::dashed_loose())
                            .name(format!("Resonant frequency: {f_res:.3} Hz")),
                    );
                }
            });
    }
}
