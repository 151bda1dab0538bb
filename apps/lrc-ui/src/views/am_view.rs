use egui::Color32;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints};
use lrc_app::AmReport;
use lrc_plot::am::{OVERVIEW_WINDOW, ZOOM_WINDOW, windowed};

/// One stacked panel of the AM figure.
pub struct Panel {
    pub title: String,
    pub series: Vec<Series>,
}

pub struct Series {
    pub label: Option<&'static str>,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    pub dashed: bool,
}

impl Series {
    fn new(t: &[f64], values: &[f64], window: f64, color: Color32) -> Self {
        Self {
            label: None,
            points: windowed(t, values, window)
                .into_iter()
                .map(|(x, y)| [x, y])
                .collect(),
            color,
            dashed: false,
        }
    }

    fn line(&self) -> Line {
        let mut line = Line::new(PlotPoints::from(self.points.clone()))
            .color(self.color)
            .width(1.5);
        if let Some(label) = self.label {
            line = line.name(label);
        }
        if self.dashed {
            line = line.style(LineStyle::dashed_loose());
        }
        line
    }
}

/// Message, modulated carrier and recovered envelope.
pub struct AmView {
    report: AmReport,
    overview: Vec<Panel>,
    zoom: Panel,
    zoomed: bool,
}

impl AmView {
    pub fn new(report: AmReport) -> Self {
        let demo = &report.demo;
        let t = &demo.t;
        let overview = vec![
            Panel {
                title: format!("Message Signal ({} Hz)", demo.message_hz),
                series: vec![Series::new(t, &demo.message, OVERVIEW_WINDOW, Color32::BLUE)],
            },
            Panel {
                title: format!(
                    "Amplitude Modulated Signal ({} Hz carrier)",
                    demo.carrier_hz
                ),
                series: vec![Series::new(t, &demo.modulated, OVERVIEW_WINDOW, Color32::GREEN)],
            },
            Panel {
                title: "Demodulated Signal vs Original Message".to_string(),
                series: vec![
                    Series {
                        label: Some("Demodulated"),
                        ..Series::new(t, &demo.demodulated, OVERVIEW_WINDOW, Color32::RED)
                    },
                    Series {
                        label: Some("Original Message"),
                        dashed: true,
                        ..Series::new(t, &demo.message, OVERVIEW_WINDOW, Color32::BLUE)
                    },
                ],
            },
        ];
        let zoom = Panel {
            title: "Zoomed View of AM Signal".to_string(),
            series: vec![Series::new(t, &demo.modulated, ZOOM_WINDOW, Color32::GREEN)],
        };
        Self {
            report,
            overview,
            zoom,
            zoomed: false,
        }
    }

    pub fn report(&self) -> &AmReport {
        &self.report
    }

    pub fn panels(&self) -> &[Panel] {
        &self.overview
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("AM Modulation and Demodulation");
            ui.separator();
            ui.checkbox(&mut self.zoomed, "Zoom on carrier");
        });
        ui.label(format!(
            "Envelope correlation with message: {:.4}",
            self.report.correlation
        ));

        if self.zoomed {
            let height = ui.available_height();
            show_panel(ui, "am_zoom", &self.zoom, height);
            return;
        }
        let height = (ui.available_height() / 3.0 - 24.0).max(80.0);
        for (i, panel) in self.overview.iter().enumerate() {
            show_panel(ui, ("am_panel", i), panel, height);
        }
    }
}

fn show_panel(ui: &mut egui::Ui, id: impl std::hash::Hash, panel: &Panel, height: f32) {
    ui.label(panel.title.as_str());
    let labelled = panel.series.iter().any(|s| s.label.is_some());
    let mut plot = Plot::new(id)
        .height(height)
        .x_axis_label("Time (s)")
        .y_axis_label("Amplitude");
    if labelled {
        plot = plot.legend(Legend::default());
    }
    plot.show(ui, |plot_ui| {
        for series in &panel.series {
            plot_ui.line(series.line());
        }
    });
}
