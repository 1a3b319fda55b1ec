//! Source image loading and the ordered image selection

use crate::types::*;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

/// A decoded input image
///
/// Pixel data is shared, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub name: String,
    image: Arc<DynamicImage>,
}

impl SourceImage {
    /// Wrap a decoded image, rejecting images without pixels
    pub fn new(name: impl Into<String>, image: DynamicImage) -> Result<Self> {
        let name = name.into();
        if image.width() == 0 || image.height() == 0 {
            return Err(ComposeError::EmptyImage(name));
        }
        Ok(Self {
            name,
            image: Arc::new(image),
        })
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...)
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?;
        Self::new(name, image)
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Load a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<SourceImage> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::fs::read(&path).await?;
    let name = display_name(&path);

    // Decoding is CPU-bound
    tokio::task::spawn_blocking(move || SourceImage::from_bytes(name, &bytes)).await?
}

/// Load several image files, keeping their order.
///
/// Files that are not in a recognised image format are skipped with a
/// warning. Files that look like images but fail to decode are errors.
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<SourceImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        if image::guess_format(&bytes).is_err() {
            warn_skipped(path);
            continue;
        }

        let name = display_name(path);
        let image =
            tokio::task::spawn_blocking(move || SourceImage::from_bytes(name, &bytes)).await??;
        log::debug!(
            "Loaded {} ({}x{} px)",
            image.name,
            image.width(),
            image.height()
        );
        images.push(image);
    }
    Ok(images)
}

/// Read pixel dimensions from the file header without decoding pixels.
///
/// The format is detected from the file contents, not its extension.
pub async fn read_dimensions(path: impl AsRef<Path>) -> Result<(u32, u32)> {
    let path = path.as_ref().to_owned();
    tokio::task::spawn_blocking(move || -> Result<(u32, u32)> {
        let dimensions = sniff_format(&path)?.into_dimensions()?;
        Ok(dimensions)
    })
    .await?
}

/// Read dimensions for several files, keeping their order.
///
/// Skips the same files `load_images` skips, so the result lines up with
/// the images a composition of `paths` would contain.
pub async fn read_all_dimensions(paths: &[impl AsRef<Path>]) -> Result<Vec<(u32, u32)>> {
    let mut dimensions = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref().to_owned();
        let header = tokio::task::spawn_blocking(move || -> Result<Option<(u32, u32)>> {
            let reader = sniff_format(&path)?;
            if reader.format().is_none() {
                warn_skipped(&path);
                return Ok(None);
            }
            Ok(Some(reader.into_dimensions()?))
        })
        .await??;

        dimensions.extend(header);
    }
    Ok(dimensions)
}

/// Header reader whose format comes from the file's magic bytes only
fn sniff_format(path: &Path) -> Result<ImageReader<BufReader<File>>> {
    let file = BufReader::new(File::open(path)?);
    Ok(ImageReader::new(file).with_guessed_format()?)
}

fn warn_skipped(path: &Path) {
    log::warn!("Skipping {}: not a supported image", path.display());
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Ordered list of images selected for composition
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    images: Vec<SourceImage>,
}

impl ImageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image to the end of the selection
    pub fn push(&mut self, image: SourceImage) {
        self.images.push(image);
    }

    /// Remove and return the image at `index`, shifting later images forward
    pub fn remove(&mut self, index: usize) -> Option<SourceImage> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SourceImage> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[SourceImage] {
        &self.images
    }
}

impl Extend<SourceImage> for ImageSet {
    fn extend<I: IntoIterator<Item = SourceImage>>(&mut self, iter: I) {
        self.images.extend(iter);
    }
}

impl FromIterator<SourceImage> for ImageSet {
    fn from_iter<I: IntoIterator<Item = SourceImage>>(iter: I) -> Self {
        Self {
            images: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a SourceImage;
    type IntoIter = std::slice::Iter<'a, SourceImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
