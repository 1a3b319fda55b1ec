//! Final placement of every image on every page
//!
//! Combines the page plan with the fit and border calculations so the
//! renderer only has to draw what it is given.

use crate::options::ComposeOptions;

use super::{
    BorderStroke, GridPosition, ImagePlacement, Rect, border_stroke, fit_image, plan_pages,
};

#[cfg(feature = "serde")]
use serde::Serialize;

/// An image positioned on a page, with its optional border
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlacedImage {
    /// Index into the input image list
    pub image_index: usize,
    pub grid_pos: GridPosition,
    /// Bounds of the cell holding the image
    pub cell: Rect,
    /// Drawn image bounds and source crop
    pub placement: ImagePlacement,
    pub border: Option<BorderStroke>,
}

/// Everything drawn on one output page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PlacedPage {
    /// Zero-based page number
    pub page_index: usize,
    pub width_mm: f32,
    pub height_mm: f32,
    pub images: Vec<PlacedImage>,
}

/// Calculate placements for images with the given pixel dimensions.
///
/// # Arguments
/// * `dimensions` - (width, height) in pixels for each input image, in order
/// * `options` - Page, layout, fit and border configuration
pub fn calculate_placements(
    dimensions: &[(u32, u32)],
    options: &ComposeOptions,
) -> Vec<PlacedPage> {
    plan_pages(dimensions.len(), options)
        .into_iter()
        .map(|page| {
            let images = page
                .cells
                .into_iter()
                .map(|assignment| {
                    let (width_px, height_px) = dimensions[assignment.image_index];
                    PlacedImage {
                        image_index: assignment.image_index,
                        grid_pos: assignment.grid_pos,
                        cell: assignment.cell,
                        placement: fit_image(
                            width_px,
                            height_px,
                            &assignment.cell,
                            options.fit_mode,
                        ),
                        border: border_stroke(&options.border, &assignment.cell),
                    }
                })
                .collect();

            PlacedPage {
                page_index: page.page_index,
                width_mm: page.width_mm,
                height_mm: page.height_mm,
                images,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BorderOptions, BorderStyle, FitMode, PageLayout};

    #[test]
    fn test_placements_follow_plan() {
        let options = ComposeOptions {
            layout: PageLayout::Double,
            ..Default::default()
        };
        let pages = calculate_placements(&[(100, 100), (200, 100), (100, 200)], &options);

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].images.len(), 2);
        assert_eq!(pages[1].images.len(), 1);
        assert_eq!(pages[1].images[0].image_index, 2);
        assert_eq!(pages[1].images[0].grid_pos, GridPosition::new(0, 0));
    }

    #[test]
    fn test_placements_stay_inside_cells() {
        let options = ComposeOptions {
            layout: PageLayout::Grid,
            fit_mode: FitMode::Fit,
            ..Default::default()
        };
        let dimensions = [(640, 480), (480, 640), (1000, 10), (10, 1000)];
        let pages = calculate_placements(&dimensions, &options);

        for placed in &pages[0].images {
            let drawn = placed.placement.rect;
            assert!(drawn.x >= placed.cell.x - 0.001);
            assert!(drawn.y >= placed.cell.y - 0.001);
            assert!(drawn.right() <= placed.cell.right() + 0.001);
            assert!(drawn.top() <= placed.cell.top() + 0.001);
        }
    }

    #[test]
    fn test_border_only_when_enabled() {
        let mut options = ComposeOptions::default();
        let pages = calculate_placements(&[(10, 10)], &options);
        assert!(pages[0].images[0].border.is_none());

        options.border = BorderOptions {
            style: BorderStyle::Dashed,
            width_mm: 1.0,
            ..Default::default()
        };
        let pages = calculate_placements(&[(10, 10)], &options);
        let border = pages[0].images[0].border.expect("border should be drawn");
        assert!(border.dash.is_some());
    }
}
