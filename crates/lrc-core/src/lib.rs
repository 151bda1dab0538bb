//! lrc-core: stable foundation for lrcscope.
//!
//! Contains:
//! - units (uom SI types + constructors for circuit quantities)
//! - numeric (Real + tolerances + float helpers)
//! - grid (linear and logarithmic evaluation grids)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LrcError, LrcResult};
pub use grid::{Grid, GridSpacing};
pub use numeric::*;
pub use units::*;
