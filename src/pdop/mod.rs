//! Position-dilution-of-precision grid analysis and satellite visibility
//! reporting.

pub mod grid;
pub mod visibility;

pub use grid::{compute_grid_pdop, elevation_deg, GridBounds, PdopCell};
pub use visibility::{contiguous_intervals, format_access_report, VisibilityInterval};
