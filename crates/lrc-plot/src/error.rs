use plotters::drawing::DrawingAreaErrorKind;
use plotters_backend::DrawingErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Drawing backend error: {0}")]
    Backend(String),

    /// No usable font for the requested family on this host.
    #[error("Font error: {0}")]
    Font(String),

    #[error("Nothing to plot: {what}")]
    EmptySeries { what: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlotResult<T> = Result<T, PlotError>;

/// Map a plotters error, keeping font failures apart from other backend errors.
pub(crate) fn backend<E>(e: DrawingAreaErrorKind<E>) -> PlotError
where
    E: std::error::Error + Send + Sync,
{
    match e {
        DrawingAreaErrorKind::BackendError(DrawingErrorKind::FontError(font)) => {
            PlotError::Font(font.to_string())
        }
        other => PlotError::Backend(other.to_string()),
    }
}
