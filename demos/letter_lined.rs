//! Wide-ruled letter notebook page rendered to SVG

use paper_maker::{LineSpacing, PaperConfig, PaperKind, generate, svg};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging with debug level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    // Letter, portrait, wide rule, notebook margins: all defaults
    let config = PaperConfig::new(PaperKind::Lined(LineSpacing::Wide));
    let drawing = generate(&config);

    svg::write_svg_file(&drawing, "letter_lined.svg")?;
    println!(
        "SVG saved as 'letter_lined.svg' ({} primitives)",
        drawing.primitives().len()
    );

    Ok(())
}
