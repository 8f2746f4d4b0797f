
//! Hexagonal lattice alignment library
//!
//! This library searches for hexagon sizes whose lattice survives rounding to whole
//! pixels, plans the canvas a chosen lattice needs, and composes sample sheets
//! comparing the best candidates of a size interval.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod lattice;
pub mod layout;
pub mod pipeline;
pub mod search;

pub use error::{HexFitError, Result};
pub use interfaces::{Axis, Orientation};
pub use lattice::{LatticeSpec, StrokeWidth};
pub use layout::{compose_sample_sheet, ExtentMode, Margins, PixelSize, SampleSheet, SheetRequest};
pub use pipeline::{fit_grid, BestFitResult, GridRequest};
pub use search::{best_fit, SearchParams, SizeInterval};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
