//! A4 landscape 5 mm graph paper rendered to a single-page PDF

use paper_maker::{Color, Margins, Orientation, PageSize, PaperConfig, PaperKind, generate, pdf};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // A4 spacing inputs are authored in millimeters
    let config = PaperConfig::new(PaperKind::Grid { size: 5.0 })
        .with_page_size(PageSize::A4)
        .with_orientation(Orientation::Landscape)
        .with_margins(Margins::uniform(0.5))
        .with_color(Color::from_hex("#9bb8d3").unwrap_or_default())
        .with_thickness(0.75);

    let drawing = generate(&config);
    let mut doc = pdf::render_document(&drawing)?;
    doc.save("a4_grid.pdf")?;

    println!(
        "PDF saved as 'a4_grid.pdf'; print with @page size '{} landscape'",
        config.page_size.css_page_size()
    );

    Ok(())
}
