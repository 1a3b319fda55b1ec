use crate::options::ComposeOptions;
use crate::types::*;

/// Calculate statistics for composing `image_count` images
pub fn calculate_statistics(
    image_count: usize,
    options: &ComposeOptions,
) -> Result<ComposeStatistics> {
    if image_count == 0 {
        return Err(ComposeError::NoImages);
    }

    let images_per_page = options.layout.images_per_page();
    let pages = options.layout.page_count(image_count);
    let empty_slots = pages * images_per_page - image_count;

    Ok(ComposeStatistics {
        images: image_count,
        pages,
        images_per_page,
        empty_slots,
    })
}
