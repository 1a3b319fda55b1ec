use crate::constants::{DEFAULT_MARGIN_MM, DEFAULT_TITLE};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Composition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ComposeOptions {
    // Page
    pub paper_size: PaperSize,
    pub orientation: Orientation,

    // Arrangement
    pub layout: PageLayout,
    /// Uniform page margin in mm, also used as the gutter between cells
    pub margin_mm: f32,
    pub fit_mode: FitMode,

    // Decoration
    pub border: BorderOptions,

    // Metadata
    pub title: String,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            paper_size: PaperSize::A4,
            orientation: Orientation::Portrait,
            layout: PageLayout::Single,
            margin_mm: DEFAULT_MARGIN_MM,
            fit_mode: FitMode::Fit,
            border: BorderOptions::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl ComposeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ComposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Page width and height in mm after orientation
    pub fn page_dimensions_mm(&self) -> (f32, f32) {
        self.paper_size.dimensions_with_orientation(self.orientation)
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if !self.margin_mm.is_finite() || self.margin_mm < 0.0 {
            return Err(ComposeError::Config(format!(
                "Margin must be a non-negative number, got {}",
                self.margin_mm
            )));
        }

        if let PaperSize::Custom {
            width_mm,
            height_mm,
        } = self.paper_size
        {
            let valid = |v: f32| v.is_finite() && v > 0.0;
            if !valid(width_mm) || !valid(height_mm) {
                return Err(ComposeError::Config(format!(
                    "Custom page size must be positive, got {} x {} mm",
                    width_mm, height_mm
                )));
            }
        }

        if !self.border.width_mm.is_finite() || self.border.width_mm < 0.0 {
            return Err(ComposeError::Config(format!(
                "Border width must be a non-negative number, got {}",
                self.border.width_mm
            )));
        }

        // Every cell needs a usable area once margins and gutters are removed
        let (page_width, page_height) = self.page_dimensions_mm();
        let (cols, rows) = self.layout.grid_dimensions();
        let cell_width = (page_width - (cols + 1) as f32 * self.margin_mm) / cols as f32;
        let cell_height = (page_height - (rows + 1) as f32 * self.margin_mm) / rows as f32;
        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(ComposeError::Config(format!(
                "A {} mm margin leaves no room for a {:?} layout on a {} x {} mm page",
                self.margin_mm, self.layout, page_width, page_height
            )));
        }

        Ok(())
    }
}
