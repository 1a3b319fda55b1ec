//! Grid layout calculation
//!
//! Divides the margined area of a page into equal cells separated by
//! margin-width gutters, and assigns images to cells page by page.

use crate::options::ComposeOptions;
use crate::types::PageLayout;

use super::{CellAssignment, GridLayout, GridPosition, PagePlan, Rect};

// =============================================================================
// Grid Creation
// =============================================================================

/// Create a grid layout for the given page layout.
///
/// # Arguments
/// * `layout` - Single, double or grid arrangement
/// * `page_width_mm` - Page width after orientation
/// * `page_height_mm` - Page height after orientation
/// * `margin_mm` - Page margin, also used between cells
pub fn create_grid_layout(
    layout: PageLayout,
    page_width_mm: f32,
    page_height_mm: f32,
    margin_mm: f32,
) -> GridLayout {
    let (cols, rows) = layout.grid_dimensions();

    let cell_width_mm = (page_width_mm - (cols + 1) as f32 * margin_mm) / cols as f32;
    let cell_height_mm = (page_height_mm - (rows + 1) as f32 * margin_mm) / rows as f32;

    GridLayout {
        cols,
        rows,
        margin_mm,
        cell_width_mm,
        cell_height_mm,
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of a cell at the given grid position.
///
/// Row 0 is the top row, so y is measured up from the bottom margin.
///
/// `pos` must lie inside the grid (`row < rows`, `col < cols`).
pub fn cell_bounds(grid: &GridLayout, pos: GridPosition) -> Rect {
    debug_assert!(
        pos.row < grid.rows && pos.col < grid.cols,
        "grid position {:?} outside {}x{} grid",
        pos,
        grid.cols,
        grid.rows
    );

    let x = grid.margin_mm + pos.col as f32 * (grid.cell_width_mm + grid.margin_mm);
    let y = grid.margin_mm
        + (grid.rows - pos.row - 1) as f32 * (grid.cell_height_mm + grid.margin_mm);

    Rect::new(x, y, grid.cell_width_mm, grid.cell_height_mm)
}

// =============================================================================
// Page Planning
// =============================================================================

/// Assign `image_count` images to pages and cells.
///
/// Images fill each page row by row (top-left, top-right, bottom-left,
/// bottom-right). The last page may leave trailing cells empty.
pub fn plan_pages(image_count: usize, options: &ComposeOptions) -> Vec<PagePlan> {
    let (page_width, page_height) = options.page_dimensions_mm();
    let grid = create_grid_layout(options.layout, page_width, page_height, options.margin_mm);
    let per_page = grid.cell_count();

    (0..options.layout.page_count(image_count))
        .map(|page_index| {
            let first = page_index * per_page;
            let last = (first + per_page).min(image_count);

            let cells = (first..last)
                .map(|image_index| {
                    let grid_pos = GridPosition::from_slot(image_index - first, grid.cols);
                    CellAssignment {
                        image_index,
                        grid_pos,
                        cell: cell_bounds(&grid, grid_pos),
                    }
                })
                .collect();

            PagePlan {
                page_index,
                width_mm: page_width,
                height_mm: page_height,
                cells,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
