use crate::compose::compose;
use crate::options::ComposeOptions;
use crate::source::SourceImage;
use crate::types::*;

/// Generate a preview of the composition
/// Returns PDF bytes holding at most `max_pages` pages
pub async fn generate_preview(
    images: &[SourceImage],
    options: &ComposeOptions,
    max_pages: usize,
) -> Result<Vec<u8>> {
    if max_pages == 0 {
        return Err(ComposeError::Config(
            "Preview needs at least one page".to_string(),
        ));
    }

    let images_needed = max_pages.saturating_mul(options.layout.images_per_page());
    let preview_images = &images[..images.len().min(images_needed)];

    compose(preview_images, options).await
}
