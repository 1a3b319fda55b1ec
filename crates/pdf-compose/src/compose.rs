//! Image composition - arranging images onto PDF pages
//!
//! This module orchestrates the composition process:
//! 1. Validate options
//! 2. Calculate placements from image dimensions
//! 3. Render each page with printpdf
//! 4. Serialize and write the document

use crate::layout::calculate_placements;
use crate::options::ComposeOptions;
use crate::render::render_page;
use crate::source::SourceImage;
use crate::types::*;
use printpdf::{PdfDocument, PdfSaveOptions};
use std::path::Path;

/// Compose images into a PDF and write it to `output_path`
pub async fn generate_pdf(
    images: &[SourceImage],
    options: &ComposeOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let bytes = compose(images, options).await?;
    save_pdf(bytes, output_path).await
}

/// Compose images into PDF bytes on the blocking pool
pub async fn compose(images: &[SourceImage], options: &ComposeOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let images = images.to_vec();
    let options = options.clone();

    // PDF generation is CPU-bound, spawn blocking
    tokio::task::spawn_blocking(move || generate_pdf_bytes(&images, &options)).await?
}

/// Write finished PDF bytes to disk
pub async fn save_pdf(bytes: Vec<u8>, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    tokio::fs::write(output_path, &bytes).await?;
    log::info!("Wrote {} bytes to {}", bytes.len(), output_path.display());
    Ok(())
}

/// Compose images into PDF bytes
pub fn generate_pdf_bytes(images: &[SourceImage], options: &ComposeOptions) -> Result<Vec<u8>> {
    options.validate()?;

    if images.is_empty() {
        return Err(ComposeError::NoImages);
    }

    let dimensions: Vec<(u32, u32)> = images.iter().map(SourceImage::dimensions).collect();
    let placed_pages = calculate_placements(&dimensions, options);

    log::info!(
        "Composing {} images onto {} {} {:?} pages ({:?} layout, {:?} fit)",
        images.len(),
        placed_pages.len(),
        options.paper_size.name(),
        options.orientation,
        options.layout,
        options.fit_mode
    );

    let mut doc = PdfDocument::new(&options.title);

    let pages = placed_pages
        .iter()
        .map(|page| render_page(&mut doc, page, images))
        .collect();
    doc.pages = pages;

    let mut warnings = Vec::new();
    let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
    if !warnings.is_empty() {
        log::debug!("printpdf reported {} warnings while saving", warnings.len());
    }

    Ok(bytes)
}
