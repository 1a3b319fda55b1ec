//! Image placement within cells
//!
//! Sizes an image of known pixel dimensions into a target rectangle
//! according to the fit mode. The result is always centered on the target.

use crate::types::FitMode;

use super::{ImagePlacement, PixelCrop, Rect};

/// Calculate where an image is drawn inside `target`.
///
/// * `Fit` scales the whole image into the target, preserving aspect ratio.
///   Images smaller than the target are scaled up.
/// * `Fill` covers the whole target, preserving aspect ratio, by cropping the
///   centered overflow from the source pixels.
/// * `Stretch` draws the image over the whole target, ignoring aspect ratio.
///
/// An image with a zero dimension has no aspect ratio and is drawn over the
/// whole target.
pub fn fit_image(
    image_width_px: u32,
    image_height_px: u32,
    target: &Rect,
    mode: FitMode,
) -> ImagePlacement {
    let stretched = ImagePlacement {
        rect: *target,
        crop: None,
    };

    if image_width_px == 0 || image_height_px == 0 {
        return stretched;
    }

    let image_aspect = image_width_px as f32 / image_height_px as f32;
    let target_aspect = target.aspect_ratio();

    match mode {
        FitMode::Fit => {
            let (width, height) = if image_aspect > target_aspect {
                // Wider than the target: width-limited
                (target.width, target.width / image_aspect)
            } else {
                // Taller than (or same shape as) the target: height-limited
                (target.height * image_aspect, target.height)
            };

            ImagePlacement {
                rect: Rect::new(
                    target.x + (target.width - width) / 2.0,
                    target.y + (target.height - height) / 2.0,
                    width,
                    height,
                ),
                crop: None,
            }
        }
        FitMode::Fill => ImagePlacement {
            rect: *target,
            crop: cover_crop(image_width_px, image_height_px, target_aspect),
        },
        FitMode::Stretch => stretched,
    }
}

/// Centered crop of the source with the target's aspect ratio.
///
/// Returns `None` when the rounded crop keeps the whole image.
fn cover_crop(width_px: u32, height_px: u32, target_aspect: f32) -> Option<PixelCrop> {
    let image_aspect = width_px as f32 / height_px as f32;

    let crop = if image_aspect > target_aspect {
        // Trim the sides
        let width = ((height_px as f32 * target_aspect).round() as u32).clamp(1, width_px);
        PixelCrop {
            x: (width_px - width) / 2,
            y: 0,
            width,
            height: height_px,
        }
    } else {
        // Trim top and bottom
        let height = ((width_px as f32 / target_aspect).round() as u32).clamp(1, height_px);
        PixelCrop {
            x: 0,
            y: (height_px - height) / 2,
            width: width_px,
            height,
        }
    };

    if crop.width == width_px && crop.height == height_px {
        None
    } else {
        Some(crop)
    }
}
