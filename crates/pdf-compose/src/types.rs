use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No images to compose")]
    NoImages,
    #[error("Image has no pixels: {0}")]
    EmptyImage(String),
}

pub type Result<T> = std::result::Result<T, ComposeError>;

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width for the standard sizes
    #[default]
    Portrait,
    /// Landscape: width and height swapped
    Landscape,
}

/// Output page sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A4,
    Letter,
    Legal,
    A5,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Base dimensions before orientation is applied
    pub fn dimensions_mm(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm, height_mm),
        }
    }

    /// Dimensions with orientation applied. Landscape swaps the two sides,
    /// custom sizes included.
    pub fn dimensions_with_orientation(self, orientation: Orientation) -> (f32, f32) {
        let (w, h) = self.dimensions_mm();
        match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
            PaperSize::Legal => "Legal",
            PaperSize::A5 => "A5",
            PaperSize::Custom { .. } => "Custom",
        }
    }
}

/// How many images go on each page, and how they are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageLayout {
    /// One image per page
    #[default]
    Single,
    /// Two images side by side
    Double,
    /// Four images in a 2x2 grid
    Grid,
}

impl PageLayout {
    pub fn images_per_page(self) -> usize {
        let (cols, rows) = self.grid_dimensions();
        cols * rows
    }

    /// Grid dimensions as (columns, rows)
    pub fn grid_dimensions(self) -> (usize, usize) {
        match self {
            PageLayout::Single => (1, 1),
            PageLayout::Double => (2, 1),
            PageLayout::Grid => (2, 2),
        }
    }

    /// Number of pages needed for `image_count` images
    pub fn page_count(self, image_count: usize) -> usize {
        image_count.div_ceil(self.images_per_page())
    }
}

/// How an image is sized inside its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitMode {
    /// Scale to fit inside the cell, preserving aspect ratio
    #[default]
    Fit,
    /// Cover the whole cell, cropping the overflow, preserving aspect ratio
    Fill,
    /// Scale to the cell exactly, ignoring aspect ratio
    Stretch,
}

/// Border line style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderStyle {
    #[default]
    None,
    Solid,
    Dashed,
    Dotted,
}

/// Where the border stroke sits relative to the cell edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderPlacement {
    /// Stroke lies in the margin, its inner edge on the cell boundary
    #[default]
    Outside,
    /// Stroke lies within the cell, its outer edge on the cell boundary
    Inside,
}

/// 8-bit RGB colour, written as `#rrggbb`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const BLACK: RgbColor = RgbColor::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels scaled to 0.0..=1.0
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for RgbColor {
    type Err = ComposeError;

    /// Accepts `#rrggbb`, `rrggbb` and the short `#rgb` form.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ComposeError::Config(format!("Invalid colour '{}', expected #rrggbb", s));
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 17)
                        .map_err(|_| invalid())
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

/// Border settings applied to every cell that holds an image
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BorderOptions {
    pub style: BorderStyle,
    /// Stroke width in millimeters
    pub width_mm: f32,
    pub color: RgbColor,
    pub placement: BorderPlacement,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            style: BorderStyle::None,
            width_mm: 1.0,
            color: RgbColor::BLACK,
            placement: BorderPlacement::Outside,
        }
    }
}

impl BorderOptions {
    /// A border is only drawn when it has both a style and a width
    pub fn is_visible(&self) -> bool {
        self.style != BorderStyle::None && self.width_mm > 0.0
    }
}

/// Summary of a composition before it is rendered
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComposeStatistics {
    /// Number of input images
    pub images: usize,
    /// Number of output pages
    pub pages: usize,
    /// Cells per page for the chosen layout
    pub images_per_page: usize,
    /// Cells left empty on the last page
    pub empty_slots: usize,
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::RgbColor;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for RgbColor {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for RgbColor {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}
