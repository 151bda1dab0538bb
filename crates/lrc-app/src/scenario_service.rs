//! Scenario loading, saving and validation.

use std::path::Path;

use lrc_project::Scenario;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Load a scenario file, or the built-in defaults when no path is given.
pub fn load_scenario(path: Option<&Path>) -> AppResult<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };
    if !path.exists() {
        return Err(AppError::ScenarioFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
    }
    let scenario = lrc_project::load(path)?;
    info!(path = %path.display(), name = %scenario.name, "loaded scenario");
    Ok(scenario)
}

/// Write a scenario; `.json` paths get JSON, everything else YAML.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => lrc_project::save_json(path, scenario)?,
        _ => lrc_project::save_yaml(path, scenario)?,
    }
    Ok(())
}

pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    lrc_project::validate_scenario(scenario)?;
    Ok(())
}
