//! A printable paper template library
//!
//! This library lays out paper backgrounds (lined, graph, dot, blank) as
//! vector drawings sized to a physical page, and renders them to SVG or
//! PDF. The layout engine is a pure function: a [`PaperConfig`] goes in,
//! an immutable [`Drawing`] of pixel-space primitives comes out.

use lopdf::{Document, ObjectId};
use tracing::{debug, instrument};

pub mod config;
pub mod constants;
pub mod drawing;
pub mod error;
pub mod layout;
pub mod page;
pub mod pdf;
pub mod style;
pub mod svg;
pub mod units;

pub use config::{DotDensity, LineSpacing, PaperConfig, PaperKind};
pub use drawing::{Drawing, Primitive};
pub use error::{PaperError, Result};
pub use layout::generate;
pub use page::{Margins, Orientation, PageDimensions, PageSize};
pub use style::{Appearance, Color};

/// Extension trait for lopdf::Document to add paper drawing capabilities
pub trait PaperDrawing {
    /// Render an already-generated paper drawing onto a page
    ///
    /// # Arguments
    /// * `page_id` - The object ID of the page to draw on
    /// * `drawing` - The drawing to render
    fn draw_paper(&mut self, page_id: ObjectId, drawing: &Drawing) -> Result<()>;

    /// Generate the drawing for a configuration and render it in one call
    fn draw_paper_config(&mut self, page_id: ObjectId, config: &PaperConfig) -> Result<()>;
}

impl PaperDrawing for Document {
    #[instrument(skip(self, drawing), fields(primitives = drawing.primitives().len()))]
    fn draw_paper(&mut self, page_id: ObjectId, drawing: &Drawing) -> Result<()> {
        debug!("drawing paper onto page {:?}", page_id);
        pdf::add_drawing_to_page(self, page_id, drawing)
    }

    fn draw_paper_config(&mut self, page_id: ObjectId, config: &PaperConfig) -> Result<()> {
        let drawing = layout::generate(config);
        self.draw_paper(page_id, &drawing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_letter_canvas() {
        let drawing = generate(&PaperConfig::default());
        assert_eq!(drawing.pixel_width(), 816.0);
        assert_eq!(drawing.pixel_height(), 1056.0);
        assert!(!drawing.is_empty());
    }

    #[test]
    fn test_config_round_trip_through_builder() {
        let config = PaperConfig::new(PaperKind::Dot(DotDensity::Fine))
            .with_page_size(PageSize::A4)
            .with_orientation(Orientation::Landscape)
            .with_margins(Margins::uniform(0.25))
            .with_color(Color::black())
            .with_thickness(2.0);
        let drawing = generate(&config);
        assert_eq!(drawing.page_size(), PageSize::A4);
        assert_eq!(drawing.orientation(), Orientation::Landscape);
        assert!(drawing
            .primitives()
            .iter()
            .all(|p| matches!(p, Primitive::Circle { r, fill, .. }
                if *r == 1.5 && *fill == Color::black())));
    }
}
