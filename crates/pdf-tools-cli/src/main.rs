mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_compose::constants::DEFAULT_OUTPUT_NAME;
use pdf_compose::layout::calculate_placements;
use pdf_compose::{ComposeOptions, RgbColor};
use std::path::PathBuf;

use logger::CliLogger;

#[derive(Parser)]
#[command(name = "pdft", about = "Compose images into PDF documents", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose images into a PDF
    Compose {
        /// Input image file(s), placed in the order given
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_NAME)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Write the effective options to a JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the placement of every image as JSON without rendering
    Plan {
        /// Input image file(s), placed in the order given
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Layout flags. Each one given overrides the config file (or the defaults).
#[derive(Args)]
struct LayoutArgs {
    /// JSON options file to start from
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output paper size
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,

    /// Custom page width in mm (with --paper custom)
    #[arg(long, requires = "height_mm")]
    width_mm: Option<f32>,

    /// Custom page height in mm (with --paper custom)
    #[arg(long, requires = "width_mm")]
    height_mm: Option<f32>,

    /// Page orientation
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Images per page
    #[arg(long, value_enum)]
    layout: Option<LayoutArg>,

    /// Margin in mm (page edges and between images)
    #[arg(long)]
    margin: Option<f32>,

    /// How images are sized inside their cells
    #[arg(long, value_enum)]
    fit: Option<FitArg>,

    /// Border style
    #[arg(long, value_enum)]
    border: Option<BorderArg>,

    /// Border width in mm
    #[arg(long)]
    border_width: Option<f32>,

    /// Border colour as #rrggbb
    #[arg(long)]
    border_color: Option<String>,

    /// Whether the border sits outside or inside the cell
    #[arg(long, value_enum)]
    border_placement: Option<PlacementArg>,

    /// Document title
    #[arg(long)]
    title: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
    Legal,
    A5,
    Custom,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Single,
    Double,
    Grid,
}

#[derive(Clone, Copy, ValueEnum)]
enum FitArg {
    Fit,
    Fill,
    Stretch,
}

#[derive(Clone, Copy, ValueEnum)]
enum BorderArg {
    None,
    Solid,
    Dashed,
    Dotted,
}

#[derive(Clone, Copy, ValueEnum)]
enum PlacementArg {
    Outside,
    Inside,
}

impl From<OrientationArg> for pdf_compose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<LayoutArg> for pdf_compose::PageLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Single => Self::Single,
            LayoutArg::Double => Self::Double,
            LayoutArg::Grid => Self::Grid,
        }
    }
}

impl From<FitArg> for pdf_compose::FitMode {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Fit => Self::Fit,
            FitArg::Fill => Self::Fill,
            FitArg::Stretch => Self::Stretch,
        }
    }
}

impl From<BorderArg> for pdf_compose::BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::None => Self::None,
            BorderArg::Solid => Self::Solid,
            BorderArg::Dashed => Self::Dashed,
            BorderArg::Dotted => Self::Dotted,
        }
    }
}

impl From<PlacementArg> for pdf_compose::BorderPlacement {
    fn from(arg: PlacementArg) -> Self {
        match arg {
            PlacementArg::Outside => Self::Outside,
            PlacementArg::Inside => Self::Inside,
        }
    }
}

impl LayoutArgs {
    /// Start from the config file (or defaults) and apply the given flags
    async fn resolve(&self) -> Result<ComposeOptions> {
        let mut options = match &self.config {
            Some(path) => ComposeOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => ComposeOptions::default(),
        };

        options.paper_size = match (self.paper, self.width_mm.zip(self.height_mm)) {
            (Some(PaperArg::Custom) | None, Some((width_mm, height_mm))) => {
                pdf_compose::PaperSize::Custom {
                    width_mm,
                    height_mm,
                }
            }
            (Some(PaperArg::Custom), None) => match options.paper_size {
                // Keep the size from the config file
                custom @ pdf_compose::PaperSize::Custom { .. } => custom,
                _ => bail!("--paper custom needs --width-mm and --height-mm"),
            },
            (Some(_), Some(_)) => bail!("--width-mm and --height-mm need --paper custom"),
            (Some(PaperArg::A4), None) => pdf_compose::PaperSize::A4,
            (Some(PaperArg::Letter), None) => pdf_compose::PaperSize::Letter,
            (Some(PaperArg::Legal), None) => pdf_compose::PaperSize::Legal,
            (Some(PaperArg::A5), None) => pdf_compose::PaperSize::A5,
            (None, None) => options.paper_size,
        };

        if let Some(orientation) = self.orientation {
            options.orientation = orientation.into();
        }
        if let Some(layout) = self.layout {
            options.layout = layout.into();
        }
        if let Some(margin) = self.margin {
            options.margin_mm = margin;
        }
        if let Some(fit) = self.fit {
            options.fit_mode = fit.into();
        }
        if let Some(border) = self.border {
            options.border.style = border.into();
        }
        if let Some(width) = self.border_width {
            options.border.width_mm = width;
        }
        if let Some(color) = &self.border_color {
            options.border.color = color
                .parse::<RgbColor>()
                .with_context(|| format!("Invalid border colour {:?}", color))?;
        }
        if let Some(placement) = self.border_placement {
            options.border.placement = placement.into();
        }
        if let Some(title) = &self.title {
            options.title = title.clone();
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    CliLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Compose {
            input,
            output,
            layout,
            save_config,
            stats_only,
        } => {
            let options = layout.resolve().await?;

            if let Some(path) = &save_config {
                options
                    .save(path)
                    .await
                    .with_context(|| format!("Failed to save config {}", path.display()))?;
                println!("Saved options → {}", path.display());
            }

            // Load all input images, skipping anything that isn't one
            let images = pdf_compose::load_images(&input).await?;

            // Calculate and show statistics
            let stats = pdf_compose::calculate_statistics(images.len(), &options)?;
            let (width_mm, height_mm) = options.page_dimensions_mm();
            println!("Composition Statistics:");
            println!("  Images: {}", stats.images);
            println!("  Pages: {}", stats.pages);
            println!("  Images per page: {}", stats.images_per_page);
            println!("  Empty slots: {}", stats.empty_slots);
            println!(
                "  Page size: {} ({:.1} x {:.1} mm)",
                options.paper_size.name(),
                width_mm,
                height_mm
            );

            if stats_only {
                return Ok(());
            }

            pdf_compose::generate_pdf(&images, &options, &output).await?;
            println!("Composed → {}", output.display());
        }

        Commands::Plan { input, layout } => {
            let options = layout.resolve().await?;

            // Skips the same inputs compose does, so image indices line up
            let dimensions = pdf_compose::read_all_dimensions(&input)
                .await
                .context("Failed to read image sizes")?;

            let pages = calculate_placements(&dimensions, &options);
            println!("{}", serde_json::to_string_pretty(&pages)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_compose::PaperSize;

    fn layout_args(args: &[&str]) -> LayoutArgs {
        let argv = ["pdft", "plan", "-i", "a.png"].into_iter().chain(args.iter().copied());
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Plan { layout, .. } => layout,
            _ => panic!("Expected plan command"),
        }
    }

    async fn write_config(dir: &tempfile::TempDir, options: &ComposeOptions) -> String {
        let path = dir.path().join("options.json");
        options.save(&path).await.unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_flags_override_defaults() {
        let options = layout_args(&["--layout", "grid", "--margin", "5", "--border", "dashed"])
            .resolve()
            .await
            .unwrap();

        assert_eq!(options.layout, pdf_compose::PageLayout::Grid);
        assert_eq!(options.margin_mm, 5.0);
        assert_eq!(options.border.style, pdf_compose::BorderStyle::Dashed);
        assert_eq!(options.paper_size, PaperSize::A4);
    }

    #[tokio::test]
    async fn test_custom_size_from_flags() {
        let options = layout_args(&["--width-mm", "100", "--height-mm", "150"])
            .resolve()
            .await
            .unwrap();

        assert_eq!(
            options.paper_size,
            PaperSize::Custom {
                width_mm: 100.0,
                height_mm: 150.0,
            }
        );
    }

    #[tokio::test]
    async fn test_paper_custom_keeps_config_size() {
        let dir = tempfile::tempdir().unwrap();
        let saved = ComposeOptions {
            paper_size: PaperSize::Custom {
                width_mm: 120.0,
                height_mm: 80.0,
            },
            ..Default::default()
        };
        let config = write_config(&dir, &saved).await;

        let options = layout_args(&["--config", config.as_str(), "--paper", "custom"])
            .resolve()
            .await
            .unwrap();

        assert_eq!(options.paper_size, saved.paper_size);
    }

    #[tokio::test]
    async fn test_paper_custom_without_size() {
        let result = layout_args(&["--paper", "custom"]).resolve().await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_size_flags_conflict_with_named_paper() {
        let result = layout_args(&["--paper", "a4", "--width-mm", "100", "--height-mm", "50"])
            .resolve()
            .await;
        assert!(result.is_err());
    }
}
