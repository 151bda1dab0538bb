//! Shared application service layer for lrcscope.
//!
//! Turns a scenario into solver configurations, runs the studies and writes
//! their figures. Both the CLI and the GUI go through this crate.

pub mod error;
pub mod scenario_service;
pub mod study;

pub use error::{AppError, AppResult};
pub use scenario_service::{load_scenario, save_scenario, validate_scenario};
pub use study::{
    AmReport, Study, figure_style, render_study, resonance_explorer, run_am, run_step, run_sweep,
};
