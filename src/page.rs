//! Page sizes, orientation, and margins

use crate::constants::*;

/// Supported physical page sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageSize {
    /// US Letter, 8.5 x 11 inches
    #[default]
    Letter,
    /// ISO A4, 210 x 297 millimeters
    A4,
}

impl PageSize {
    /// Resolve the physical dimensions in inches for the given orientation
    pub fn dimensions(&self, orientation: Orientation) -> PageDimensions {
        let (width, height) = match self {
            PageSize::Letter => (LETTER_WIDTH_IN, LETTER_HEIGHT_IN),
            // A4 is defined in millimeters; the inch values are derived
            PageSize::A4 => (A4_WIDTH_MM / MM_PER_INCH, A4_HEIGHT_MM / MM_PER_INCH),
        };
        match orientation {
            Orientation::Portrait => PageDimensions { width, height },
            Orientation::Landscape => PageDimensions {
                width: height,
                height: width,
            },
        }
    }

    /// The CSS `@page` size string a print collaborator should use so the
    /// hard-copy scale matches the drawing
    pub fn css_page_size(&self) -> &'static str {
        match self {
            PageSize::Letter => "8.5in 11in",
            PageSize::A4 => "210mm 297mm",
        }
    }
}

/// Page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Physical page dimensions in inches, after any orientation swap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: f64,
    pub height: f64,
}

impl PageDimensions {
    /// Canvas width in device pixels
    pub fn pixel_width(&self) -> f64 {
        self.width * DPI
    }

    /// Canvas height in device pixels
    pub fn pixel_height(&self) -> f64 {
        self.height * DPI
    }
}

/// Page margins in inches, independent of the display unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margins {
    /// Create margins with explicit values for each side
    pub fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Create uniform margins
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// No margins at all
    pub fn none() -> Self {
        Self::uniform(0.0)
    }

    /// Whether any side has a non-zero margin
    pub fn any(&self) -> bool {
        self.top > 0.0 || self.bottom > 0.0 || self.left > 0.0 || self.right > 0.0
    }
}

impl Default for Margins {
    /// Notebook-style defaults: half an inch on three sides, a wider left
    /// margin for the binding edge
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.75, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_portrait_dimensions() {
        let dims = PageSize::Letter.dimensions(Orientation::Portrait);
        assert_eq!(dims.width, 8.5);
        assert_eq!(dims.height, 11.0);
        assert_eq!(dims.pixel_width(), 816.0);
        assert_eq!(dims.pixel_height(), 1056.0);
    }

    #[test]
    fn test_a4_landscape_swaps_axes() {
        let portrait = PageSize::A4.dimensions(Orientation::Portrait);
        let landscape = PageSize::A4.dimensions(Orientation::Landscape);
        assert_eq!(landscape.width, portrait.height);
        assert_eq!(landscape.height, portrait.width);
        assert!((landscape.width - 297.0 / 25.4).abs() < 1e-12);
        assert!((landscape.height - 210.0 / 25.4).abs() < 1e-12);
    }

    #[test]
    fn test_css_page_sizes() {
        assert_eq!(PageSize::Letter.css_page_size(), "8.5in 11in");
        assert_eq!(PageSize::A4.css_page_size(), "210mm 297mm");
    }

    #[test]
    fn test_margins_any() {
        assert!(!Margins::none().any());
        assert!(Margins::new(0.0, 0.0, 0.1, 0.0).any());
        assert!(Margins::default().any());
    }
}
