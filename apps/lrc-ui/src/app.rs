use std::path::{Path, PathBuf};

use egui::Color32;
use lrc_app::{AppResult, load_scenario, resonance_explorer, run_am, run_step, run_sweep};
use lrc_plot::{Figure, FigureStyle, PlotResult};
use tracing::info;

use crate::views::{AmView, ResonanceView, StepView, SweepView};

/// Study shown in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum View {
    Step,
    Sweep,
    Am,
    #[default]
    Resonance,
}

impl View {
    const ALL: [View; 4] = [View::Step, View::Sweep, View::Am, View::Resonance];

    fn label(self) -> &'static str {
        match self {
            View::Step => "Step Response",
            View::Sweep => "Frequency Response",
            View::Am => "AM Demodulation",
            View::Resonance => "Resonance Explorer",
        }
    }
}

enum Status {
    Saved(Vec<PathBuf>),
    Failed(String),
}

pub struct LrcApp {
    active_view: View,
    step_view: AppResult<StepView>,
    sweep_view: AppResult<SweepView>,
    am_view: AppResult<AmView>,
    resonance_view: AppResult<ResonanceView>,
    output_dir: PathBuf,
    dpi: u32,
    status: Option<Status>,
}

impl LrcApp {
    /// Loads the scenario and runs every study once. A study that fails
    /// shows its error in place of the plot.
    pub fn from_config(config: Option<&Path>, view: View) -> AppResult<Self> {
        let scenario = load_scenario(config)?;
        Ok(Self {
            active_view: view,
            step_view: run_step(&scenario).map(StepView::new),
            sweep_view: run_sweep(&scenario).map(SweepView::new),
            am_view: run_am(&scenario).map(AmView::new),
            resonance_view: resonance_explorer(&scenario).map(ResonanceView::new),
            output_dir: scenario.output.dir.clone(),
            dpi: scenario.output.dpi,
            status: None,
        })
    }

    fn style(&self, figure: Figure) -> FigureStyle {
        FigureStyle::for_figure(figure, self.dpi)
    }

    /// Writes the figures of the active view as they are currently shown.
    fn save_active(&self) -> Result<Vec<PathBuf>, String> {
        let target = |figure: Figure| self.output_dir.join(figure.file_name());
        let rendered: PlotResult<Vec<PathBuf>> = match self.active_view {
            View::Step => {
                let view = self.step_view.as_ref().map_err(|e| e.to_string())?;
                let path = target(Figure::StepResponse);
                lrc_plot::render_step_response(
                    view.response(),
                    &path,
                    self.style(Figure::StepResponse),
                )
                .map(|()| vec![path])
            }
            View::Sweep => {
                let view = self.sweep_view.as_ref().map_err(|e| e.to_string())?;
                let path = target(Figure::FrequencyResponse);
                lrc_plot::render_frequency_response(
                    view.result(),
                    &path,
                    self.style(Figure::FrequencyResponse),
                )
                .map(|()| vec![path])
            }
            View::Am => {
                let view = self.am_view.as_ref().map_err(|e| e.to_string())?;
                let demo = &view.report().demo;
                let overview = target(Figure::AmOverview);
                let zoom = target(Figure::AmZoom);
                lrc_plot::render_am(demo, &overview, self.style(Figure::AmOverview))
                    .and_then(|()| {
                        lrc_plot::render_am_zoom(demo, &zoom, self.style(Figure::AmZoom))
                    })
                    .map(|()| vec![overview, zoom])
            }
            View::Resonance => {
                let view = self.resonance_view.as_ref().map_err(|e| e.to_string())?;
                let path = target(Figure::Resonance);
                lrc_plot::render_resonance(view.explorer(), &path, self.style(Figure::Resonance))
                    .map(|()| vec![path])
            }
        };
        rendered.map_err(|e| e.to_string())
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        let mut save_clicked = false;
        ui.horizontal(|ui| {
            if self.active_view == View::Resonance {
                if let Ok(view) = &mut self.resonance_view {
                    if let Err(e) = view.show_controls(ui) {
                        self.status = Some(Status::Failed(e.to_string()));
                    }
                    ui.separator();
                }
            }
            save_clicked = ui.button("Save PNG").clicked();
        });

        if save_clicked {
            self.status = Some(match self.save_active() {
                Ok(paths) => {
                    for path in &paths {
                        info!(path = %path.display(), "figure written");
                    }
                    Status::Saved(paths)
                }
                Err(msg) => Status::Failed(msg),
            });
        }

        match &self.status {
            Some(Status::Saved(paths)) => {
                for path in paths {
                    ui.label(format!("✓ Saved {}", path.display()));
                }
            }
            Some(Status::Failed(msg)) => {
                ui.colored_label(Color32::RED, msg);
            }
            None => {}
        }
    }
}

impl eframe::App for LrcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            self.show_controls(ui);
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for view in View::ALL {
                    if ui
                        .selectable_value(&mut self.active_view, view, view.label())
                        .clicked()
                    {
                        self.status = None;
                    }
                }
            });
            ui.separator();

            let shown = match self.active_view {
                View::Step => self.step_view.as_ref().map(|v| v.show(ui)),
                View::Sweep => self.sweep_view.as_ref().map(|v| v.show(ui)),
                View::Am => self.am_view.as_mut().map(|v| v.show(ui)).map_err(|e| &*e),
                View::Resonance => self.resonance_view.as_ref().map(|v| v.show(ui)),
            };
            if let Err(e) = shown {
                ui.colored_label(Color32::RED, format!("{}: {e}", self.active_view.label()));
            }
        });
    }
}
