//! Conversion of decoded rasters into printpdf image data

use crate::layout::PixelCrop;
use image::{DynamicImage, Rgb, RgbImage, Rgba};
use printpdf::{RawImage, RawImageData, RawImageFormat};

/// Build an RGB8 raw image for embedding, applying `crop` first.
///
/// Transparent pixels are composited onto a white background, since the
/// embedded image carries no alpha channel.
pub fn to_raw_image(source: &DynamicImage, crop: Option<PixelCrop>) -> RawImage {
    let cropped;
    let image = match crop {
        Some(c) => {
            cropped = source.crop_imm(c.x, c.y, c.width, c.height);
            &cropped
        }
        None => source,
    };

    let rgb = if image.color().has_alpha() {
        flatten_on_white(image)
    } else {
        image.to_rgb8()
    };

    let (width, height) = rgb.dimensions();
    RawImage {
        pixels: RawImageData::U8(rgb.into_raw()),
        width: width as usize,
        height: height as usize,
        data_format: RawImageFormat::RGB8,
        tag: Vec::new(),
    }
}

fn flatten_on_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut rgb = RgbImage::new(rgba.width(), rgba.height());

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;
        let alpha = a as f32 / 255.0;
        let blend = |channel: u8| (channel as f32 * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        rgb.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    rgb
}
