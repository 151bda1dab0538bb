use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use lrc_ac::{ExplorerConfig, ResonanceExplorer, SweepConfig, sweep};
use lrc_plot::{
    FigureStyle, PlotError, PlotResult, render_am, render_am_zoom, render_frequency_response,
    render_resonance, render_step_response,
};
use lrc_signal::{AmConfig, am_demo};
use lrc_sim::{StepResponseConfig, step_response};

const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("{}_{}", prefix, nanos));
    dir
}

fn small() -> FigureStyle {
    FigureStyle::new(480, 320)
}

/// Checks the PNG, or skips when the host has no usable font.
fn assert_png(result: PlotResult<()>, path: &Path) {
    match result {
        Ok(()) => {
            let bytes = fs::read(path).expect("figure was not written");
            assert!(bytes.len() > PNG_MAGIC.len());
            assert_eq!(bytes[..8], PNG_MAGIC);
        }
        Err(PlotError::Font(msg)) => {
            eprintln!("skipping {}: {}", path.display(), msg);
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn step_response_figure() {
    let dir = unique_temp_dir("lrc_plot_step");
    let cfg = StepResponseConfig {
        samples: 200,
        ..StepResponseConfig::default()
    };
    let response = step_response(&cfg).unwrap();
    let path = dir.join("figure_1.png");
    assert_png(render_step_response(&response, &path, small()), &path);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn frequency_response_figure() {
    let dir = unique_temp_dir("lrc_plot_sweep");
    let mut cfg = SweepConfig::default();
    cfg.grid.points = 200;
    let result = sweep(&cfg).unwrap();
    let path = dir.join("figure_2.png");
    assert_png(render_frequency_response(&result, &path, small()), &path);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn am_figures() {
    let dir = unique_temp_dir("lrc_plot_am");
    let mut cfg = AmConfig::default();
    cfg.grid.points = 5_000;
    let demo = am_demo(&cfg).unwrap();

    let overview = dir.join("figure_3.png");
    assert_png(render_am(&demo, &overview, small()), &overview);
    let zoom = dir.join("figure_3_zoom.png");
    assert_png(render_am_zoom(&demo, &zoom, small()), &zoom);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn am_figures_for_a_late_time_grid() {
    let dir = unique_temp_dir("lrc_plot_am_late");
    let mut cfg = AmConfig::default();
    cfg.grid.start = 2.0;
    cfg.grid.end = 3.0;
    cfg.grid.points = 5_000;
    let demo = am_demo(&cfg).unwrap();

    let overview = dir.join("figure_3.png");
    assert_png(render_am(&demo, &overview, small()), &overview);
    let zoom = dir.join("figure_3_zoom.png");
    assert_png(render_am_zoom(&demo, &zoom, small()), &zoom);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn resonance_figure_after_slider_move() {
    let dir = unique_temp_dir("lrc_plot_resonance");
    let mut explorer = ResonanceExplorer::new(ExplorerConfig::default()).unwrap();
    explorer.set_capacitance(2.5).unwrap();
    let path = dir.join("figure_4.png");
    assert_png(render_resonance(&explorer, &path, small()), &path);
    let _ = fs::remove_dir_all(&dir);
}
