pub mod am_view;
pub mod resonance_view;
pub mod step_view;
pub mod sweep_view;

pub use am_view::AmView;
pub use resonance_view::ResonanceView;
pub use step_view::StepView;
pub use sweep_view::SweepView;
