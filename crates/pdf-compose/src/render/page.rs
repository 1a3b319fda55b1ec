//! Output page rendering
//!
//! Turns a placed page into printpdf operations: one image XObject per
//! placed image, followed by its border stroke.

use crate::constants::{IMAGE_EMBED_DPI, mm_to_pt};
use crate::layout::{BorderStroke, DashPattern, PlacedImage, PlacedPage};
use crate::source::SourceImage;
use printpdf::{
    Color, Line, LineDashPattern, LinePoint, Mm, Op, PdfDocument, PdfPage, Point, Pt, Rgb,
    XObjectId, XObjectTransform,
};

use super::raster::to_raw_image;

// =============================================================================
// Public API
// =============================================================================

/// Render one placed page, embedding its images into `doc`.
///
/// # Arguments
/// * `doc` - The output document (receives the image XObjects)
/// * `page` - Placements computed for this page
/// * `images` - All input images, indexed by `PlacedImage::image_index`
pub fn render_page(doc: &mut PdfDocument, page: &PlacedPage, images: &[SourceImage]) -> PdfPage {
    let mut ops = Vec::new();

    for placed in &page.images {
        let source = &images[placed.image_index];
        let raw = to_raw_image(source.image(), placed.placement.crop);
        let (width_px, height_px) = (raw.width, raw.height);
        let xobject_id = doc.add_image(&raw);

        log::debug!(
            "Page {}: {} at ({:.1}, {:.1}) {:.1}x{:.1} mm",
            page.page_index + 1,
            source.name,
            placed.placement.rect.x,
            placed.placement.rect.y,
            placed.placement.rect.width,
            placed.placement.rect.height
        );

        ops.push(image_op(xobject_id, placed, width_px, height_px));

        if let Some(stroke) = &placed.border {
            ops.extend(border_ops(stroke));
        }
    }

    PdfPage::new(Mm(page.width_mm), Mm(page.height_mm), ops)
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Place an embedded image so it covers the placement rect exactly.
///
/// At the embed DPI one pixel is one point, so the scale factors map the
/// pixel size onto the target size in points.
fn image_op(id: XObjectId, placed: &PlacedImage, width_px: usize, height_px: usize) -> Op {
    let rect = placed.placement.rect;

    Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(mm_to_pt(rect.x))),
            translate_y: Some(Pt(mm_to_pt(rect.y))),
            rotate: None,
            scale_x: Some(mm_to_pt(rect.width) / width_px as f32),
            scale_y: Some(mm_to_pt(rect.height) / height_px as f32),
            dpi: Some(IMAGE_EMBED_DPI),
        },
    }
}

/// Stroke a closed rectangle for a border.
pub fn border_ops(stroke: &BorderStroke) -> Vec<Op> {
    let (r, g, b) = stroke.color.to_unit();
    let rect = stroke.rect;

    let corner = |x: f32, y: f32| LinePoint {
        p: Point {
            x: Pt(mm_to_pt(x)),
            y: Pt(mm_to_pt(y)),
        },
        bezier: false,
    };

    vec![
        Op::SaveGraphicsState,
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb::new(r, g, b, None)),
        },
        Op::SetOutlineThickness {
            pt: Pt(mm_to_pt(stroke.width_mm)),
        },
        Op::SetLineDashPattern {
            dash: line_dash_pattern(stroke.dash),
        },
        Op::DrawLine {
            line: Line {
                points: vec![
                    corner(rect.x, rect.y),
                    corner(rect.right(), rect.y),
                    corner(rect.right(), rect.top()),
                    corner(rect.x, rect.top()),
                ],
                is_closed: true,
            },
        },
        Op::RestoreGraphicsState,
    ]
}

/// PDF dash arrays are whole points; keep every segment at least 1pt long.
fn line_dash_pattern(dash: Option<DashPattern>) -> LineDashPattern {
    let to_pt = |mm: f32| (mm_to_pt(mm).round() as i64).max(1);

    LineDashPattern {
        offset: 0,
        dash_1: dash.map(|d| to_pt(d.dash_mm)),
        gap_1: dash.map(|d| to_pt(d.gap_mm)),
        dash_2: None,
        gap_2: None,
        dash_3: None,
        gap_3: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::types::RgbColor;

    fn stroke(dash: Option<DashPattern>) -> BorderStroke {
        BorderStroke {
            rect: Rect::new(9.0, 9.0, 102.0, 52.0),
            width_mm: 2.0,
            color: RgbColor::new(255, 0, 0),
            dash,
        }
    }

    #[test]
    fn test_border_ops_are_balanced() {
        let ops = border_ops(&stroke(None));

        assert!(matches!(ops.first(), Some(Op::SaveGraphicsState)));
        assert!(matches!(ops.last(), Some(Op::RestoreGraphicsState)));
        assert!(
            ops.iter()
                .any(|op| matches!(op, Op::DrawLine { line } if line.is_closed && line.points.len() == 4))
        );
    }

    #[test]
    fn test_solid_border_has_empty_dash() {
        let pattern = line_dash_pattern(None);
        assert_eq!(pattern.dash_1, None);
        assert_eq!(pattern.gap_1, None);
    }

    #[test]
    fn test_dash_lengths_in_points() {
        let dashed = line_dash_pattern(Some(DashPattern {
            dash_mm: 5.0,
            gap_mm: 5.0,
        }));
        assert_eq!(dashed.dash_1, Some(14));
        assert_eq!(dashed.gap_1, Some(14));

        let dotted = line_dash_pattern(Some(DashPattern {
            dash_mm: 1.0,
            gap_mm: 3.0,
        }));
        assert_eq!(dotted.dash_1, Some(3));
        assert_eq!(dotted.gap_1, Some(9));
    }
}
