use pdf_compose::*;

#[test]
fn test_default_options() {
    let options = ComposeOptions::default();
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.layout, PageLayout::Single);
    assert_eq!(options.margin_mm, 10.0);
    assert_eq!(options.fit_mode, FitMode::Fit);
    assert_eq!(options.border.style, BorderStyle::None);
    assert!(options.validate().is_ok());
}

#[test]
fn test_page_dimensions_follow_orientation() {
    let options = ComposeOptions {
        paper_size: PaperSize::Letter,
        orientation: Orientation::Landscape,
        ..Default::default()
    };
    assert_eq!(options.page_dimensions_mm(), (279.4, 215.9));
}

#[test]
fn test_validation_negative_margin() {
    let options = ComposeOptions {
        margin_mm: -1.0,
        ..Default::default()
    };
    match options.validate() {
        Err(ComposeError::Config(msg)) => assert!(msg.contains("Margin")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_custom_size() {
    let mut options = ComposeOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 100.0,
        },
        margin_mm: 0.0,
        ..Default::default()
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::Custom {
        width_mm: f32::NAN,
        height_mm: 100.0,
    };
    assert!(options.validate().is_err());

    options.paper_size = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 100.0,
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_margin_too_large_for_layout() {
    // 70mm margins fit a single A4 cell but leave nothing for two columns
    let mut options = ComposeOptions {
        margin_mm: 70.0,
        ..Default::default()
    };
    assert!(options.validate().is_ok());

    options.layout = PageLayout::Double;
    assert!(options.validate().is_err());

    options.layout = PageLayout::Grid;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_negative_border_width() {
    let mut options = ComposeOptions::default();
    options.border.width_mm = -0.5;
    assert!(options.validate().is_err());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = ComposeOptions {
        paper_size: PaperSize::Custom {
            width_mm: 100.0,
            height_mm: 150.0,
        },
        orientation: Orientation::Landscape,
        layout: PageLayout::Grid,
        margin_mm: 5.0,
        fit_mode: FitMode::Fill,
        border: BorderOptions {
            style: BorderStyle::Dashed,
            width_mm: 0.5,
            color: RgbColor::new(0x12, 0x34, 0x56),
            placement: BorderPlacement::Inside,
        },
        title: "Holiday".to_string(),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();

    // Colours are stored in their hex form
    let json = std::fs::read_to_string(path).unwrap();
    assert!(json.contains("\"#123456\""));

    let loaded = ComposeOptions::load(path).await.unwrap();
    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "layout": "Double", "margin_mm": 4.0 }"#).unwrap();

    let loaded = ComposeOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.layout, PageLayout::Double);
    assert_eq!(loaded.margin_mm, 4.0);
    assert_eq!(loaded.paper_size, PaperSize::A4);
    assert_eq!(loaded.title, "Images");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_json() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    match ComposeOptions::load(temp_file.path()).await {
        Err(ComposeError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        _ => panic!("Expected Config error"),
    }
}
