//! Constants for page dimensions and common values

/// Device-independent pixels per inch used for all rasterized coordinates
pub const DPI: f64 = 96.0;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// PDF points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// US Letter page width in inches
pub const LETTER_WIDTH_IN: f64 = 8.5;

/// US Letter page height in inches
pub const LETTER_HEIGHT_IN: f64 = 11.0;

/// A4 page width in millimeters (the metric definition is authoritative)
pub const A4_WIDTH_MM: f64 = 210.0;

/// A4 page height in millimeters
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Minimum left margin (in pixels) before the notebook accent line is drawn
pub const ACCENT_LINE_MARGIN_THRESHOLD: f64 = 50.0;

/// Horizontal inset of the accent line from the left margin boundary, in pixels
pub const ACCENT_LINE_INSET: f64 = 10.0;

/// Every Nth grid rule is drawn thicker to aid counting
pub const GRID_MAJOR_INTERVAL: usize = 5;

/// Thickness multiplier for major grid rules
pub const GRID_MAJOR_FACTOR: f64 = 1.5;

/// Dot radius as a multiple of the configured stroke thickness
pub const DOT_RADIUS_FACTOR: f64 = 0.75;

/// Stroke width multiplier for the blank-page margin guide
pub const MARGIN_GUIDE_WIDTH_FACTOR: f64 = 0.5;

/// Dash pattern for the margin guide, in pixels
pub const MARGIN_GUIDE_DASH: (f64, f64) = (5.0, 5.0);

/// Opacity of the margin guide
pub const MARGIN_GUIDE_OPACITY: f64 = 0.3;

/// Tolerance when matching a decimal inch value to a common fraction
pub const FRACTION_SNAP_TOLERANCE: f64 = 0.001;

/// Common fractional-inch spacing marks recognized for display,
/// as (numerator, denominator) pairs
pub const NICE_FRACTIONS: [(u32, u32); 9] = [
    (1, 4),
    (9, 32),
    (5, 16),
    (11, 32),
    (3, 8),
    (13, 32),
    (7, 16),
    (15, 32),
    (1, 2),
];
