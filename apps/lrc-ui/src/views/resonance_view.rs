use egui::{Align2, Color32, RichText};
use egui_plot::{GridMark, MarkerShape, Plot, PlotBounds, PlotPoint, Points, Text};
use lrc_ac::{AcResult, ResonanceExplorer};
use tracing::debug;

use crate::curve::{AxisScale, CurveData, decade_label};

/// Resonance curve driven by the capacitance slider.
pub struct ResonanceView {
    explorer: ResonanceExplorer,
    /// Slider position; snapped back to the explorer after every change
    slider_value: f64,
}

impl ResonanceView {
    pub fn new(explorer: ResonanceExplorer) -> Self {
        Self {
            slider_value: explorer.capacitance(),
            explorer,
        }
    }

    pub fn explorer(&self) -> &ResonanceExplorer {
        &self.explorer
    }

    fn on_slider_changed(&mut self) -> AcResult<()> {
        let changed = self.explorer.set_capacitance(self.slider_value)?;
        self.slider_value = self.explorer.capacitance();
        if changed {
            debug!(
                capacitance_f = self.explorer.capacitance(),
                resonant_hz = self.explorer.marker().frequency,
                "capacitance changed"
            );
        }
        Ok(())
    }

    /// Capacitance slider; returns the explorer's error if the value is rejected.
    pub fn show_controls(&mut self, ui: &mut egui::Ui) -> AcResult<()> {
        let (c_min, c_max) = self.explorer.c_range();
        let c_step = self.explorer.config().c_step;
        ui.spacing_mut().slider_width = (ui.available_width() - 420.0).max(200.0);
        let response = ui.add(
            egui::Slider::new(&mut self.slider_value, c_min..=c_max)
                .step_by(c_step)
                .text("Capacitance (F)"),
        );
        if response.changed() {
            self.on_slider_changed()?;
        }
        Ok(())
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.heading("LRC Circuit Frequency Response");
        let freqs = self.explorer.freqs();
        let (Some(&f0), Some(&f1)) = (freqs.first(), freqs.last()) else {
            return;
        };
        let (y0, y1) = self.explorer.y_limits();
        let marker = self.explorer.marker();
        let (label_f, label_z) = self.explorer.label_anchor();
        let curve = CurveData::new("|Z|", freqs, self.explorer.curve(), Color32::BLUE);

        Plot::new("resonance_plot")
            .x_axis_label("Frequency (Hz)")
            .y_axis_label("Impedance (Ω)")
            .x_axis_formatter(|mark: GridMark, _range| decade_label(mark.value))
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                    [f0.log10(), y0],
                    [f1.log10(), y1],
                ));
                plot_ui.line(curve.line(AxisScale::Log10, AxisScale::Linear));
                plot_ui.points(
                    Points::new(vec![[marker.frequency.log10(), marker.magnitude]])
                        .shape(MarkerShape::Circle)
                        .radius(5.0)
                        .color(Color32::RED),
                );
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(label_f.log10(), label_z),
                        RichText::new(self.explorer.label()).color(Color32::RED),
                    )
                    .anchor(Align2::CENTER_BOTTOM),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrc_ac::ExplorerConfig;

    #[test]
    fn slider_snaps_through_explorer() {
        let explorer = ResonanceExplorer::new(ExplorerConfig::default()).unwrap();
        let mut view = ResonanceView::new(explorer);
        view.slider_value = 2.04;
        view.on_slider_changed().unwrap();
        assert!((view.slider_value - 2.0).abs() < 1e-12);
        assert!((view.explorer().capacitance() - 2.0).abs() < 1e-12);
    }
}
