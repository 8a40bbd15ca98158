//! The geometric layout engine
//!
//! Converts a physical-unit configuration into an ordered sequence of
//! drawing primitives positioned inside the margin-bounded drawable area.
//! Every generator is a pure function of its inputs; identical
//! configurations always produce identical primitive sequences.

use crate::config::{PaperConfig, PaperKind};
use crate::constants::*;
use crate::drawing::{Drawing, Primitive};
use crate::page::{Margins, PageDimensions};
use crate::style::Color;
use tracing::{debug, trace, warn};

/// The drawable rectangle in device pixels, shared by every pattern variant
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Left edge (the left margin boundary)
    start_x: f64,
    /// Right edge (canvas width minus the right margin)
    end_x: f64,
    /// Top edge (the top margin boundary)
    start_y: f64,
    /// Bottom edge (canvas height minus the bottom margin)
    end_y: f64,
}

impl Frame {
    fn new(dims: PageDimensions, margins: &Margins) -> Self {
        Self {
            start_x: margins.left * DPI,
            end_x: dims.pixel_width() - margins.right * DPI,
            start_y: margins.top * DPI,
            end_y: dims.pixel_height() - margins.bottom * DPI,
        }
    }

    fn width(&self) -> f64 {
        self.end_x - self.start_x
    }

    fn height(&self) -> f64 {
        self.end_y - self.start_y
    }
}

/// Generate a drawing for the given configuration.
///
/// This is the single entry point of the engine: configuration in, fresh
/// immutable [`Drawing`] out.
pub fn generate(config: &PaperConfig) -> Drawing {
    let dims = config.dimensions();
    let frame = Frame::new(dims, &config.margins);

    debug!(
        "generating {:?} paper, canvas {}x{} px",
        config.kind,
        dims.pixel_width(),
        dims.pixel_height()
    );

    let mut primitives = Vec::new();
    match config.kind {
        PaperKind::Lined(_) => generate_lined(config, frame, &mut primitives),
        PaperKind::Grid { .. } => generate_grid(config, frame, &mut primitives),
        PaperKind::Dot(_) => generate_dot(config, frame, &mut primitives),
        PaperKind::Blank => generate_blank(config, frame, &mut primitives),
    }

    trace!("emitted {} primitives", primitives.len());
    Drawing::new(primitives, dims, config.page_size, config.orientation)
}

/// Resolve the pattern spacing to pixels, rejecting degenerate values.
///
/// A zero or negative spacing would loop forever; it produces an empty
/// drawing instead.
fn resolved_spacing(config: &PaperConfig) -> Option<f64> {
    let spacing = config.kind.spacing_pixels(config.unit_system())?;
    if spacing <= 0.0 {
        warn!("non-positive spacing {} px, emitting nothing", spacing);
        return None;
    }
    Some(spacing)
}

/// Horizontal rules offset one spacing below the top margin, plus the
/// notebook accent line when the left margin is wide enough
fn generate_lined(config: &PaperConfig, frame: Frame, out: &mut Vec<Primitive>) {
    let Some(spacing) = resolved_spacing(config) else {
        return;
    };
    let style = config.appearance;

    let mut y = frame.start_y + spacing;
    while y <= frame.end_y {
        out.push(Primitive::Line {
            x1: frame.start_x,
            y1: y,
            x2: frame.end_x,
            y2: y,
            color: style.color,
            width: style.thickness,
        });
        y += spacing;
    }

    // Red margin line for the notebook effect, 10 px inside the boundary
    if frame.start_x > ACCENT_LINE_MARGIN_THRESHOLD {
        let x = frame.start_x - ACCENT_LINE_INSET;
        out.push(Primitive::Line {
            x1: x,
            y1: frame.start_y,
            x2: x,
            y2: frame.end_y,
            color: Color::accent_red(),
            width: style.thickness,
        });
    }
}

/// Square grid flush with the drawable edges. Each pass numbers its rules
/// from 0 and draws every 5th one thicker for easier counting; the vertical
/// and horizontal counters are independent.
fn generate_grid(config: &PaperConfig, frame: Frame, out: &mut Vec<Primitive>) {
    let Some(spacing) = resolved_spacing(config) else {
        return;
    };
    let style = config.appearance;

    let rule_width = |index: usize| {
        if index % GRID_MAJOR_INTERVAL == 0 {
            style.thickness * GRID_MAJOR_FACTOR
        } else {
            style.thickness
        }
    };

    let mut x = frame.start_x;
    let mut count = 0;
    while x <= frame.end_x {
        out.push(Primitive::Line {
            x1: x,
            y1: frame.start_y,
            x2: x,
            y2: frame.end_y,
            color: style.color,
            width: rule_width(count),
        });
        x += spacing;
        count += 1;
    }

    let mut y = frame.start_y;
    count = 0;
    while y <= frame.end_y {
        out.push(Primitive::Line {
            x1: frame.start_x,
            y1: y,
            x2: frame.end_x,
            y2: y,
            color: style.color,
            width: rule_width(count),
        });
        y += spacing;
        count += 1;
    }
}

/// Dots on a square lattice anchored at the top-left drawable corner,
/// inclusive of the boundary
fn generate_dot(config: &PaperConfig, frame: Frame, out: &mut Vec<Primitive>) {
    let Some(spacing) = resolved_spacing(config) else {
        return;
    };
    let style = config.appearance;
    let radius = style.thickness * DOT_RADIUS_FACTOR;

    let mut y = frame.start_y;
    while y <= frame.end_y {
        let mut x = frame.start_x;
        while x <= frame.end_x {
            out.push(Primitive::Circle {
                cx: x,
                cy: y,
                r: radius,
                fill: style.color,
            });
            x += spacing;
        }
        y += spacing;
    }
}

/// No pattern; just a dashed, low-opacity outline of the drawable area as
/// a margin guide, and only when there is a margin to show
fn generate_blank(config: &PaperConfig, frame: Frame, out: &mut Vec<Primitive>) {
    if !config.margins.any() {
        return;
    }
    let style = config.appearance;
    out.push(Primitive::Rect {
        x: frame.start_x,
        y: frame.start_y,
        width: frame.width(),
        height: frame.height(),
        stroke: style.color,
        stroke_width: style.thickness * MARGIN_GUIDE_WIDTH_FACTOR,
        dash: Some(MARGIN_GUIDE_DASH),
        opacity: MARGIN_GUIDE_OPACITY,
    });
}
