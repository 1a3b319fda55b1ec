//! Layout calculation modules for composition
//!
//! This module handles all the geometric calculations for placing images:
//! - Grid layout (cell division, page assignment)
//! - Image fitting (fit, fill, stretch)
//! - Border strokes around cells
//! - Final per-page placements

mod border;
mod fit;
mod grid;
mod placement;
mod types;

pub use border::*;
pub use fit::*;
pub use grid::*;
pub use placement::*;
pub use types::*;
