//! Layout data types for composition
//!
//! These types carry the geometry computed for each page between
//! the options and the PDF renderer. All lengths are millimeters
//! with the origin at the bottom-left corner of the page.

use crate::types::RgbColor;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Position within the page grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position of the `slot`th cell when filling row by row
    pub fn from_slot(slot: usize, cols: usize) -> Self {
        Self::new(slot / cols, slot % cols)
    }
}

/// Grid of equally sized cells on a page
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Number of columns in the grid
    pub cols: usize,
    /// Number of rows in the grid
    pub rows: usize,
    /// Page margin, also the gap between neighbouring cells
    pub margin_mm: f32,
    /// Width of each cell
    pub cell_width_mm: f32,
    /// Height of each cell
    pub cell_height_mm: f32,
}

impl GridLayout {
    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }
}

/// A rectangular area in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    /// Grow (positive) or shrink (negative) the rect by `amount` on every side
    pub fn outset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }
}

/// One image assigned to one cell of a page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CellAssignment {
    /// Index into the input image list
    pub image_index: usize,
    pub grid_pos: GridPosition,
    /// Bounds of the cell on the page
    pub cell: Rect,
}

/// All cell assignments for one output page
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PagePlan {
    /// Zero-based page number
    pub page_index: usize,
    pub width_mm: f32,
    pub height_mm: f32,
    pub cells: Vec<CellAssignment>,
}

/// Region of the source image to keep, in pixels from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PixelCrop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Where and how an image is drawn inside its cell
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ImagePlacement {
    /// Drawn image bounds on the page
    pub rect: Rect,
    /// Source crop applied before drawing (fill mode only)
    pub crop: Option<PixelCrop>,
}

/// Dash pattern for a stroked line, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DashPattern {
    pub dash_mm: f32,
    pub gap_mm: f32,
}

/// A stroked rectangle drawn around a cell
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BorderStroke {
    /// Path of the stroke centerline
    pub rect: Rect,
    pub width_mm: f32,
    pub color: RgbColor,
    /// None for a solid line
    pub dash: Option<DashPattern>,
}
