//! Error types for signal processing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignalError {
    #[error("Signal is empty: {what}")]
    Empty { what: &'static str },

    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Core(#[from] lrc_core::LrcError),
}

pub type SignalResult<T> = Result<T, SignalError>;
