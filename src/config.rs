//! Paper configuration: pattern kind, spacing parameters, and the
//! top-level config record passed into the layout engine

use crate::constants::DPI;
use crate::page::{Margins, Orientation, PageDimensions, PageSize};
use crate::style::{Appearance, Color};
use crate::units::{self, UnitSystem};
use tracing::debug;

/// Line spacing for ruled paper.
///
/// Presets carry the standard US rule widths; `Custom` takes a value in the
/// page's native unit (inches for Letter, millimeters for A4).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineSpacing {
    /// Wide rule, 11/32 inch
    #[default]
    Wide,
    /// College rule, 9/32 inch
    College,
    /// Narrow rule, 1/4 inch
    Narrow,
    /// Explicit spacing in the page's native unit
    Custom(f64),
}

impl LineSpacing {
    /// The spacing value in the given unit system's native unit.
    ///
    /// Metric preset values are derived from the inch definitions through
    /// the display rounding rule (0.1 mm), so both unit systems agree with
    /// what a user would see in the controls.
    pub fn value(&self, units: UnitSystem) -> f64 {
        let inches = match self {
            LineSpacing::Wide => 11.0 / 32.0,
            LineSpacing::College => 9.0 / 32.0,
            LineSpacing::Narrow => 0.25,
            LineSpacing::Custom(v) => return *v,
        };
        match units {
            UnitSystem::Imperial => inches,
            UnitSystem::Metric => units::inches_to_mm(inches),
        }
    }
}

/// Dot lattice density, in dots per inch.
///
/// The metric pitches are fixed "nice" millimeter values approximating, but
/// intentionally not equal to, the exact conversion of the inch pitch. Do
/// not replace the table with a derived formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DotDensity {
    /// 2 dots per inch (12.7 mm metric pitch)
    #[default]
    Sparse,
    /// 3 dots per inch (8.5 mm metric pitch)
    Medium,
    /// 4 dots per inch (6.4 mm metric pitch)
    Dense,
    /// 5 dots per inch (5.0 mm metric pitch)
    Fine,
}

impl DotDensity {
    /// Dots per inch on imperial pages
    pub fn per_inch(&self) -> f64 {
        match self {
            DotDensity::Sparse => 2.0,
            DotDensity::Medium => 3.0,
            DotDensity::Dense => 4.0,
            DotDensity::Fine => 5.0,
        }
    }

    /// Lattice pitch in millimeters on metric pages
    pub fn metric_pitch_mm(&self) -> f64 {
        match self {
            DotDensity::Sparse => 12.7,
            DotDensity::Medium => 8.5,
            DotDensity::Dense => 6.4,
            DotDensity::Fine => 5.0,
        }
    }
}

/// The pattern drawn on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaperKind {
    /// Horizontal rules with an optional notebook accent line
    Lined(LineSpacing),
    /// Square grid; `size` is the cell edge in the page's native unit
    Grid { size: f64 },
    /// Square dot lattice
    Dot(DotDensity),
    /// No pattern; a dashed margin guide when margins are set
    Blank,
}

impl PaperKind {
    /// Parse a kind from its control-panel name.
    ///
    /// Unrecognized names fall back to lined paper so a caller always gets
    /// something drawable.
    pub fn from_name(name: &str) -> Self {
        match name {
            "lined" => PaperKind::Lined(LineSpacing::default()),
            "graph" | "grid" => PaperKind::Grid { size: 2.0 },
            "dot" => PaperKind::Dot(DotDensity::default()),
            "blank" => PaperKind::Blank,
            other => {
                debug!("unknown paper kind '{}', falling back to lined", other);
                PaperKind::Lined(LineSpacing::default())
            }
        }
    }

    /// Resolve the pattern spacing to device pixels for the given unit
    /// system. `None` for blank paper, which has no spacing.
    pub fn spacing_pixels(&self, units: UnitSystem) -> Option<f64> {
        match self {
            PaperKind::Lined(spacing) => Some(units.to_pixels(spacing.value(units))),
            PaperKind::Grid { size } => Some(units.to_pixels(*size)),
            PaperKind::Dot(density) => Some(match units {
                UnitSystem::Imperial => DPI / density.per_inch(),
                UnitSystem::Metric => units::mm_to_pixels(density.metric_pitch_mm()),
            }),
            PaperKind::Blank => None,
        }
    }
}

impl Default for PaperKind {
    fn default() -> Self {
        PaperKind::Lined(LineSpacing::default())
    }
}

/// Complete configuration for one paper drawing.
///
/// Passed by value into the engine on each regeneration; the engine itself
/// holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperConfig {
    pub kind: PaperKind,
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    pub appearance: Appearance,
}

impl PaperConfig {
    /// Create a configuration for the given pattern with default page
    /// settings (Letter, portrait, notebook margins, blue 1 px strokes)
    pub fn new(kind: PaperKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Set the page size
    pub fn with_page_size(mut self, size: PageSize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the orientation
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Set the margins
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the stroke color
    pub fn with_color(mut self, color: Color) -> Self {
        self.appearance.color = color;
        self
    }

    /// Set the base stroke thickness in device pixels
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.appearance.thickness = thickness;
        self
    }

    /// The unit system spacing inputs are authored in for this page size
    pub fn unit_system(&self) -> UnitSystem {
        UnitSystem::for_page(self.page_size)
    }

    /// Physical dimensions in inches after the orientation swap
    pub fn dimensions(&self) -> PageDimensions {
        self.page_size.dimensions(self.orientation)
    }
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            kind: PaperKind::default(),
            page_size: PageSize::default(),
            orientation: Orientation::default(),
            margins: Margins::default(),
            appearance: Appearance::default(),
        }
    }
}
