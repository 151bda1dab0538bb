use egui::{Align2, Color32, RichText};
use egui_plot::{Arrows, HLine, Legend, LineStyle, Plot, PlotPoint, Text};
use lrc_plot::step::{CALLOUTS, Y_RANGE, trace_color, trace_label};
use lrc_sim::StepResponse;

use crate::curve::{AxisScale, CurveData, color32};

/// Current against time for every resistance.
pub struct StepView {
    response: StepResponse,
    curves: Vec<CurveData>,
}

impl StepView {
    pub fn new(response: StepResponse) -> Self {
        let curves = response
            .traces
            .iter()
            .map(|trace| {
                let c = trace_color(trace.damping);
                CurveData::new(
                    trace_label(trace),
                    &response.t,
                    &trace.current,
                    color32((c.0, c.1, c.2)),
                )
            })
            .collect();
        Self { response, curves }
    }

    pub fn response(&self) -> &StepResponse {
        &self.response
    }

    pub fn curves(&self) -> &[CurveData] {
        &self.curves
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.heading("Step Response of Series LRC Circuit");
        ui.label(format!(
            "Natural frequency: {:.3} Hz",
            self.response.natural_frequency_hz
        ));

        let t1 = self.response.t.last().copied().unwrap_or_default();
        let level = self.response.steady_state;

        Plot::new("step_plot")
            .legend(Legend::default())
            .x_axis_label("Time (s)")
            .y_axis_label("Current (A)")
            .include_y(Y_RANGE.0)
            .include_y(Y_RANGE.1)
            .show(ui, |plot_ui| {
                for curve in &self.curves {
                    plot_ui.line(curve.line(AxisScale::Linear, AxisScale::Linear));
                }
                plot_ui.hline(
                    HLine::new(level)
                        .color(Color32::GRAY)
                        .style(LineStyle::dashed_loose())
                        .name(format!("Steady-state ({level:.1} A)")),
                );
                for callout in CALLOUTS.iter().filter(|c| c.anchor.0 < t1) {
                    let color = color32((callout.color.0, callout.color.1, callout.color.2));
                    plot_ui.arrows(
                        Arrows::new(
                            vec![[callout.anchor.0, callout.anchor.1]],
                            vec![[callout.target.0, callout.target.1]],
                        )
                        .color(color),
                    );
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(callout.anchor.0, callout.anchor.1),
                            RichText::new(callout.text).color(color),
                        )
                        .anchor(Align2::CENTER_TOP),
                    );
                }
            });
    }
}
