//! Error types for frequency-domain analysis.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcError {
    #[error("Non-physical parameter: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Frequency must be strictly positive and finite, got {value} Hz")]
    InvalidFrequency { value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Core(#[from] lrc_core::LrcError),
}

pub type AcResult<T> = Result<T, AcError>;
