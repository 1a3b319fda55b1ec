//! Border geometry around cells

use crate::constants::{DASHED_PATTERN_MM, DOTTED_PATTERN_MM};
use crate::types::{BorderOptions, BorderPlacement, BorderStyle};

use super::{BorderStroke, DashPattern, Rect};

/// Calculate the stroke for a cell's border, if one should be drawn.
///
/// The stroke is centered on its path, so the path is offset by half the
/// border width: outward for `Outside` (the stroke lies entirely in the
/// margin) or inward for `Inside` (the stroke lies entirely in the cell).
pub fn border_stroke(border: &BorderOptions, cell: &Rect) -> Option<BorderStroke> {
    if !border.is_visible() {
        return None;
    }

    let half = border.width_mm / 2.0;
    let rect = match border.placement {
        BorderPlacement::Outside => cell.outset(half),
        BorderPlacement::Inside => cell.outset(-half),
    };

    Some(BorderStroke {
        rect,
        width_mm: border.width_mm,
        color: border.color,
        dash: dash_pattern(border.style),
    })
}

/// Dash pattern for a border style; solid and absent borders have none
pub fn dash_pattern(style: BorderStyle) -> Option<DashPattern> {
    let (dash_mm, gap_mm) = match style {
        BorderStyle::None | BorderStyle::Solid => return None,
        BorderStyle::Dashed => DASHED_PATTERN_MM,
        BorderStyle::Dotted => DOTTED_PATTERN_MM,
    };
    Some(DashPattern { dash_mm, gap_mm })
}
