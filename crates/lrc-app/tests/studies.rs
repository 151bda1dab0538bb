//! Integration tests for the lrc-app service layer.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use lrc_app::{
    AppError, Study, load_scenario, render_study, resonance_explorer, run_am, run_step, run_sweep,
    save_scenario, validate_scenario,
};
use lrc_plot::FigureStyle;
use lrc_project::{MethodDef, Scenario};
use lrc_sim::Damping;

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

/// Width and height from the IHDR chunk.
fn png_size(bytes: &[u8]) -> (u32, u32) {
    let be = |at: usize| {
        u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    };
    (be(16), be(20))
}

fn light_scenario() -> Scenario {
    let mut s = Scenario::default();
    s.step.samples = 200;
    s.sweep.frequency.points = 200;
    s.am.samples = 5_000;
    s.resonance.frequency.points = 200;
    s.output.dpi = 40;
    s
}

#[test]
fn default_scenario_without_file() {
    let scenario = load_scenario(None).unwrap();
    assert_eq!(scenario, Scenario::default());
    validate_scenario(&scenario).unwrap();
}

#[test]
fn missing_scenario_file_is_reported() {
    let path = unique_temp_dir("lrc_app_missing").join("nope.yaml");
    let err = load_scenario(Some(&path)).unwrap_err();
    assert!(matches!(err, AppError::ScenarioFileRead { .. }));
}

#[test]
fn saved_scenario_loads_back() {
    let dir = unique_temp_dir("lrc_app_roundtrip");
    fs::create_dir_all(&dir).unwrap();
    let mut scenario = Scenario::default();
    scenario.name = "Slow step".to_string();
    scenario.step.method = MethodDef::Rk4;

    for file in ["scenario.yaml", "scenario.json"] {
        let path = dir.join(file);
        save_scenario(&path, &scenario).unwrap();
        assert_eq!(load_scenario(Some(&path)).unwrap(), scenario);
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn invalid_scenario_is_not_saved() {
    let dir = unique_temp_dir("lrc_app_invalid");
    fs::create_dir_all(&dir).unwrap();
    let mut scenario = Scenario::default();
    scenario.step.inductance_h = -1.0;
    let path = dir.join("bad.yaml");
    assert!(matches!(
        save_scenario(&path, &scenario),
        Err(AppError::Validation(_))
    ));
    assert!(!path.exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn studies_reproduce_reference_behaviour() {
    let scenario = Scenario::default();

    let step = run_step(&scenario).unwrap();
    let under = step.trace(Damping::Underdamped).unwrap();
    assert!(under.overshoots(step.steady_state, 1e-3));
    let over = step.trace(Damping::Overdamped).unwrap();
    assert!(!over.overshoots(step.steady_state, 5e-3));

    let sweep = run_sweep(&scenario).unwrap();
    assert!((sweep.resonant_hz - 0.159_154_943).abs() < 1e-6);

    let am = run_am(&scenario).unwrap();
    assert!(am.correlation > 0.95, "correlation {}", am.correlation);

    let explorer = resonance_explorer(&scenario).unwrap();
    assert_eq!(explorer.capacitance(), 1.0);
    assert_eq!(explorer.label(), "f_res = 0.159 Hz");
}

#[test]
fn render_every_study() {
    let dir = unique_temp_dir("lrc_app_figures");
    let scenario = light_scenario();
    for study in Study::ALL {
        match render_study(study, &scenario, &dir) {
            Ok(paths) => {
                assert_eq!(paths.len(), study.figures().len());
                for (path, &figure) in paths.iter().zip(study.figures()) {
                    let bytes = fs::read(path).unwrap();
                    let style = FigureStyle::for_figure(figure, 40);
                    assert_eq!(png_size(&bytes), (style.width, style.height), "{figure:?}");
                }
            }
            Err(AppError::MissingFont(msg)) => eprintln!("Skipping {study}: {msg}"),
            Err(other) => panic!("{study} failed: {other}"),
        }
    }
    let _ = fs::remove_dir_all(&dir);
}
