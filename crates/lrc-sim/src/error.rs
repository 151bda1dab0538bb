//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered during transient simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Step size underflow at t={t}: dt={dt}")]
    StepSizeUnderflow { t: f64, dt: f64 },

    #[error("Maximum number of steps ({max_steps}) exceeded at t={t}")]
    MaxStepsExceeded { max_steps: usize, t: f64 },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<lrc_core::LrcError> for SimError {
    fn from(e: lrc_core::LrcError) -> Self {
        match e {
            lrc_core::LrcError::NonPositive { what, .. }
            | lrc_core::LrcError::NonFinite { what, .. } => SimError::NonPhysical { what },
            other => SimError::Backend {
                message: other.to_string(),
            },
        }
    }
}
