//! The four studies: scenario to configuration, run, and figure output.

use std::fmt;
use std::path::{Path, PathBuf};

use lrc_ac::{ExplorerConfig, ResonanceExplorer, SweepConfig, SweepResult};
use lrc_core::{Grid, volt};
use lrc_plot::{Figure, FigureStyle};
use lrc_project::{AmDef, MethodDef, ResonanceDef, Scenario, StepDef, SweepDef};
use lrc_signal::{AmConfig, AmDemo, normalized_cross_correlation, trim_edges};
use lrc_sim::{SolveMethod, StepResponse, StepResponseConfig, StepSource};
use tracing::{debug, info};

use crate::error::AppResult;

/// Share of samples dropped at each end before comparing message and envelope.
pub const EDGE_TRIM: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Study {
    Step,
    Sweep,
    Am,
    Resonance,
}

impl Study {
    pub const ALL: [Study; 4] = [Study::Step, Study::Sweep, Study::Am, Study::Resonance];

    /// Figures written by [`render_study`], in order.
    pub fn figures(self) -> &'static [Figure] {
        match self {
            Study::Step => &[Figure::StepResponse],
            Study::Sweep => &[Figure::FrequencyResponse],
            Study::Am => &[Figure::AmOverview, Figure::AmZoom],
            Study::Resonance => &[Figure::Resonance],
        }
    }

    /// Files written by [`render_study`], relative to the output directory.
    pub fn figure_names(self) -> Vec<&'static str> {
        self.figures().iter().map(|f| f.file_name()).collect()
    }
}

impl fmt::Display for Study {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Study::Step => "step response",
            Study::Sweep => "frequency response",
            Study::Am => "AM demodulation",
            Study::Resonance => "resonance explorer",
        };
        f.write_str(name)
    }
}

pub fn step_config(def: &StepDef) -> StepResponseConfig {
    StepResponseConfig {
        inductance: def.inductance_h,
        capacitance: def.capacitance_f,
        resistances: def.resistances_ohm.clone(),
        source: StepSource::new(volt(def.step_voltage_v), def.step_onset_s),
        t_span: (def.t_start_s, def.t_end_s),
        samples: def.samples,
        method: match def.method {
            MethodDef::Rk45 { rtol, atol } => SolveMethod::Rk45 { rtol, atol },
            MethodDef::Rk4 => SolveMethod::Rk4,
        },
    }
}

pub fn sweep_config(def: &SweepDef) -> SweepConfig {
    SweepConfig {
        inductance: def.inductance_h,
        capacitance: def.capacitance_f,
        resistances: def.resistances_ohm.clone(),
        grid: def.frequency,
    }
}

pub fn am_config(def: &AmDef) -> AppResult<AmConfig> {
    Ok(AmConfig {
        grid: Grid::linspace(def.t_start_s, def.t_end_s, def.samples)?,
        message_hz: def.message_hz,
        carrier_hz: def.carrier_hz,
        modulation_index: def.modulation_index,
    })
}

pub fn explorer_config(def: &ResonanceDef) -> ExplorerConfig {
    ExplorerConfig {
        inductance: def.inductance_h,
        resistance: def.resistance_ohm,
        c_min: def.capacitance_min_f,
        c_max: def.capacitance_max_f,
        c_step: def.capacitance_step_f,
        c_init: def.capacitance_init_f,
        grid: def.frequency,
        y_max: def.impedance_max_ohm,
    }
}

pub fn figure_style(scenario: &Scenario, figure: Figure) -> FigureStyle {
    FigureStyle::for_figure(figure, scenario.output.dpi)
}

/// Integrate the step response and log a per-resistance summary.
pub fn run_step(scenario: &Scenario) -> AppResult<StepResponse> {
    let response = lrc_sim::step_response(&step_config(&scenario.step))?;
    info!(
        natural_frequency_hz = response.natural_frequency_hz,
        steady_state_a = response.steady_state,
        "step response"
    );
    for trace in &response.traces {
        info!(
            resistance = trace.resistance,
            damping = %trace.damping,
            peak = ?trace.peak().map(|(_, v)| v),
            final_value = ?trace.final_value(),
            "trace"
        );
        debug!(
            resistance = trace.resistance,
            accepted = trace.stats.accepted,
            rejected = trace.stats.rejected,
            rhs_calls = trace.stats.rhs_calls,
            "solver stats"
        );
    }
    Ok(response)
}

pub fn run_sweep(scenario: &Scenario) -> AppResult<SweepResult> {
    let result = lrc_ac::sweep(&sweep_config(&scenario.sweep))?;
    info!(resonant_hz = result.resonant_hz, "frequency response");
    for curve in &result.curves {
        if let Some(min) = curve.minimum(&result.freqs) {
            info!(
                resistance = curve.resistance,
                min_impedance = min.magnitude,
                at_hz = min.frequency,
                "impedance minimum"
            );
        }
    }
    Ok(result)
}

/// AM demo plus how well the envelope tracks the message.
#[derive(Clone, Debug)]
pub struct AmReport {
    pub demo: AmDemo,
    /// Pearson correlation over the samples left after [`EDGE_TRIM`]
    pub correlation: f64,
}

pub fn run_am(scenario: &Scenario) -> AppResult<AmReport> {
    let demo = lrc_signal::am_demo(&am_config(&scenario.am)?)?;
    let correlation = normalized_cross_correlation(
        trim_edges(&demo.message, EDGE_TRIM)?,
        trim_edges(&demo.demodulated, EDGE_TRIM)?,
    )?;
    info!(
        samples = demo.t.len(),
        correlation, "envelope detection"
    );
    Ok(AmReport { demo, correlation })
}

pub fn resonance_explorer(scenario: &Scenario) -> AppResult<ResonanceExplorer> {
    let explorer = ResonanceExplorer::new(explorer_config(&scenario.resonance))?;
    let marker = explorer.marker();
    info!(
        capacitance_f = explorer.capacitance(),
        resonant_hz = marker.frequency,
        min_impedance = marker.magnitude,
        "resonance explorer"
    );
    Ok(explorer)
}

/// Run one study and write its figures into `out_dir`.
pub fn render_study(study: Study, scenario: &Scenario, out_dir: &Path) -> AppResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let style = |figure| figure_style(scenario, figure);
    let paths: Vec<PathBuf> = study
        .figures()
        .iter()
        .map(|figure| out_dir.join(figure.file_name()))
        .collect();

    match study {
        Study::Step => lrc_plot::render_step_response(
            &run_step(scenario)?,
            &paths[0],
            style(Figure::StepResponse),
        )?,
        Study::Sweep => lrc_plot::render_frequency_response(
            &run_sweep(scenario)?,
            &paths[0],
            style(Figure::FrequencyResponse),
        )?,
        Study::Am => {
            let report = run_am(scenario)?;
            lrc_plot::render_am(&report.demo, &paths[0], style(Figure::AmOverview))?;
            lrc_plot::render_am_zoom(&report.demo, &paths[1], style(Figure::AmZoom))?;
        }
        Study::Resonance => lrc_plot::render_resonance(
            &resonance_explorer(scenario)?,
            &paths[0],
            style(Figure::Resonance),
        )?,
    }

    for path in &paths {
        info!(study = %study, path = %path.display(), "figure written");
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_maps_to_reference_configs() {
        let scenario = Scenario::default();

        let step = step_config(&scenario.step);
        assert_eq!(step.resistances, vec![0.5, 2.0, 4.0]);
        assert_eq!(step.t_span, (0.0, 20.0));
        assert_eq!(step.source, StepSource::default());
        assert_eq!(step.method, SolveMethod::default());

        let sweep = sweep_config(&scenario.sweep);
        assert_eq!(sweep.grid.points, 1000);

        let am = am_config(&scenario.am).unwrap();
        assert_eq!(am.grid.points, 50_000);
        assert_eq!(am.carrier_hz, 100.0);

        assert_eq!(explorer_config(&scenario.resonance), ExplorerConfig::default());
        assert_eq!(
            figure_style(&scenario, Figure::StepResponse),
            FigureStyle::new(3600, 2400)
        );
        assert_eq!(
            figure_style(&scenario, Figure::FrequencyResponse),
            FigureStyle::new(3000, 1800)
        );
    }

    #[test]
    fn rk4_method_is_carried_over() {
        let def = StepDef {
            method: MethodDef::Rk4,
            ..StepDef::default()
        };
        assert_eq!(step_config(&def).method, SolveMethod::Rk4);
    }

    #[test]
    fn bad_am_grid_is_rejected() {
        let def = AmDef {
            samples: 1,
            ..AmDef::default()
        };
        assert!(am_config(&def).is_err());
    }

    #[test]
    fn every_study_names_its_figures() {
        for study in Study::ALL {
            assert!(!study.figure_names().is_empty());
        }
        assert_eq!(Study::Am.figure_names(), vec!["figure_3.png", "figure_3_zoom.png"]);
        assert_eq!(Study::Sweep.figure_names(), vec!["figure_2.png"]);
    }
}
