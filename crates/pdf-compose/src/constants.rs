//! Shared constants for image composition
//!
//! Layout is computed in millimeters; these helpers convert to the
//! point units used inside the PDF content stream.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Defaults
// =============================================================================

/// File name used when the caller does not supply one
pub const DEFAULT_OUTPUT_NAME: &str = "converted.pdf";

/// Document title used when none is configured
pub const DEFAULT_TITLE: &str = "Images";

/// Default margin (and gutter between cells) in millimeters
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// Images are embedded at 72 DPI so one pixel maps to one point before scaling
pub const IMAGE_EMBED_DPI: f32 = 72.0;

// =============================================================================
// Border Dash Patterns (millimeters, on/off)
// =============================================================================

/// Dashed border: 5mm dash, 5mm gap
pub const DASHED_PATTERN_MM: (f32, f32) = (5.0, 5.0);

/// Dotted border: 1mm dot, 3mm gap
pub const DOTTED_PATTERN_MM: (f32, f32) = (1.0, 3.0);
