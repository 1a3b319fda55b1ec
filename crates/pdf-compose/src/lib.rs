pub mod compose;
pub mod constants;
pub mod layout;
mod options;
mod preview;
pub mod render;
mod source;
mod stats;
mod types;

pub use compose::{compose, generate_pdf, generate_pdf_bytes, save_pdf};
pub use options::*;
pub use preview::generate_preview;
pub use source::{
    ImageSet, SourceImage, load_image, load_images, read_all_dimensions, read_dimensions,
};
pub use stats::calculate_statistics;
pub use types::*;
