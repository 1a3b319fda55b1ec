use pdf_compose::*;

#[test]
fn test_paper_size_dimensions() {
    assert_eq!(PaperSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PaperSize::Letter.dimensions_mm(), (215.9, 279.4));
    assert_eq!(PaperSize::Legal.dimensions_mm(), (215.9, 355.6));
    assert_eq!(PaperSize::A5.dimensions_mm(), (148.0, 210.0));

    let custom = PaperSize::Custom {
        width_mm: 100.0,
        height_mm: 200.0,
    };
    assert_eq!(custom.dimensions_mm(), (100.0, 200.0));
}

#[test]
fn test_landscape_swaps_dimensions() {
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PaperSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );

    // Custom sizes are swapped too, even when already wider than tall
    let custom = PaperSize::Custom {
        width_mm: 300.0,
        height_mm: 100.0,
    };
    assert_eq!(
        custom.dimensions_with_orientation(Orientation::Landscape),
        (100.0, 300.0)
    );
}

#[test]
fn test_page_layout_counts() {
    assert_eq!(PageLayout::Single.images_per_page(), 1);
    assert_eq!(PageLayout::Double.images_per_page(), 2);
    assert_eq!(PageLayout::Grid.images_per_page(), 4);

    assert_eq!(PageLayout::Double.grid_dimensions(), (2, 1));
    assert_eq!(PageLayout::Grid.grid_dimensions(), (2, 2));
}

#[test]
fn test_page_count_rounds_up() {
    assert_eq!(PageLayout::Single.page_count(0), 0);
    assert_eq!(PageLayout::Single.page_count(3), 3);
    assert_eq!(PageLayout::Double.page_count(3), 2);
    assert_eq!(PageLayout::Double.page_count(4), 2);
    assert_eq!(PageLayout::Grid.page_count(5), 2);
    assert_eq!(PageLayout::Grid.page_count(8), 2);
    assert_eq!(PageLayout::Grid.page_count(9), 3);
}

#[test]
fn test_rgb_color_parsing() {
    assert_eq!("#ff8000".parse::<RgbColor>().unwrap(), RgbColor::new(255, 128, 0));
    assert_eq!("00FF00".parse::<RgbColor>().unwrap(), RgbColor::new(0, 255, 0));
    assert_eq!("#fff".parse::<RgbColor>().unwrap(), RgbColor::new(255, 255, 255));

    assert!("#ff80".parse::<RgbColor>().is_err());
    assert!("#gg0000".parse::<RgbColor>().is_err());
    assert!("".parse::<RgbColor>().is_err());
}

#[test]
fn test_rgb_color_display() {
    assert_eq!(RgbColor::new(255, 128, 0).to_string(), "#ff8000");
    assert_eq!(RgbColor::BLACK.to_string(), "#000000");
}

#[test]
fn test_border_visibility() {
    let mut border = BorderOptions::default();
    assert!(!border.is_visible());

    border.style = BorderStyle::Dotted;
    assert!(border.is_visible());

    border.width_mm = 0.0;
    assert!(!border.is_visible());
}
