//! Error types for the lrc-app service layer.

use std::path::PathBuf;

/// Unified error for the frontends; backend errors are flattened to text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Frequency analysis error: {0}")]
    Analysis(String),

    #[error("Signal processing error: {0}")]
    Signal(String),

    #[error("Plot error: {0}")]
    Plot(String),

    /// The host has no font plotters can use for figure text.
    #[error("No usable font: {0}")]
    MissingFont(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<lrc_project::ProjectError> for AppError {
    fn from(err: lrc_project::ProjectError) -> Self {
        match err {
            lrc_project::ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            other => AppError::Scenario(other.to_string()),
        }
    }
}

impl From<lrc_project::ValidationError> for AppError {
    fn from(err: lrc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<lrc_sim::SimError> for AppError {
    fn from(err: lrc_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<lrc_ac::AcError> for AppError {
    fn from(err: lrc_ac::AcError) -> Self {
        AppError::Analysis(err.to_string())
    }
}

impl From<lrc_signal::SignalError> for AppError {
    fn from(err: lrc_signal::SignalError) -> Self {
        AppError::Signal(err.to_string())
    }
}

impl From<lrc_core::LrcError> for AppError {
    fn from(err: lrc_core::LrcError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<lrc_plot::PlotError> for AppError {
    fn from(err: lrc_plot::PlotError) -> Self {
        match err {
            lrc_plot::PlotError::Font(msg) => AppError::MissingFont(msg),
            other => AppError::Plot(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_failures_stay_distinct_from_backend_failures() {
        let font = AppError::from(lrc_plot::PlotError::Font("sans-serif".into()));
        assert!(matches!(font, AppError::MissingFont(_)));
        let backend = AppError::from(lrc_plot::PlotError::Backend("io".into()));
        assert!(matches!(backend, AppError::Plot(_)));
    }
}
