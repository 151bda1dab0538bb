//! PNG rendering of the study results.
//!
//! One function per figure. Each takes the computed result, a target path
//! and a [`FigureStyle`], and writes a single PNG.

pub mod am;
pub mod error;
pub mod frequency;
pub mod resonance;
pub mod step;
pub mod style;

pub use am::{render_am, render_am_zoom};
pub use error::{PlotError, PlotResult};
pub use frequency::render_frequency_response;
pub use resonance::render_resonance;
pub use step::render_step_response;
pub use style::{Figure, FigureStyle};
