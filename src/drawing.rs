//! Vector primitives and the assembled drawing

use crate::page::{Orientation, PageDimensions, PageSize};
use crate::style::Color;

/// A single drawing instruction, already in final pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A straight stroked line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
    },
    /// A filled circle
    Circle { cx: f64, cy: f64, r: f64, fill: Color },
    /// A stroked (unfilled) rectangle
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: Color,
        stroke_width: f64,
        /// Dash-gap lengths in pixels; `None` for a solid stroke
        dash: Option<(f64, f64)>,
        opacity: f64,
    },
}

/// An immutable paper drawing: an ordered primitive sequence plus the
/// canvas size and page metadata the consuming surface needs for sizing.
///
/// Constructed fresh on every regeneration; no transformation of
/// coordinates happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    primitives: Vec<Primitive>,
    dimensions: PageDimensions,
    page_size: PageSize,
    orientation: Orientation,
}

impl Drawing {
    pub(crate) fn new(
        primitives: Vec<Primitive>,
        dimensions: PageDimensions,
        page_size: PageSize,
        orientation: Orientation,
    ) -> Self {
        Self {
            primitives,
            dimensions,
            page_size,
            orientation,
        }
    }

    /// The drawing instructions in emission order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Canvas width in device pixels
    pub fn pixel_width(&self) -> f64 {
        self.dimensions.pixel_width()
    }

    /// Canvas height in device pixels
    pub fn pixel_height(&self) -> f64 {
        self.dimensions.pixel_height()
    }

    /// Physical dimensions in inches
    pub fn dimensions(&self) -> PageDimensions {
        self.dimensions
    }

    /// The page size the drawing was built for
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// The orientation the drawing was built for
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the drawing contains no primitives
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
