//! One SVG per dot density, on the default letter page

use paper_maker::{DotDensity, PaperConfig, PaperKind, generate, svg, units};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let densities = [
        ("sparse", DotDensity::Sparse),
        ("medium", DotDensity::Medium),
        ("dense", DotDensity::Dense),
        ("fine", DotDensity::Fine),
    ];

    for (name, density) in densities {
        let config = PaperConfig::new(PaperKind::Dot(density)).with_thickness(1.5);
        let drawing = generate(&config);
        let path = format!("dots_{name}.svg");
        svg::write_svg_file(&drawing, &path)?;
        println!(
            "{path}: {} dots/inch, pitch {}\"",
            density.per_inch(),
            units::format_inches(1.0 / density.per_inch())
        );
    }

    Ok(())
}
