//! PDF rendering modules for composition
//!
//! This module handles all printpdf-specific operations:
//! - Converting decoded images into embeddable RGB data
//! - Building output pages from placements
//! - Stroking borders

mod page;
mod raster;

pub use page::{border_ops, render_page};
pub use raster::to_raw_image;
