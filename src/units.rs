//! Conversion between inches, millimeters, and device pixels
//!
//! Every physical quantity resolves to pixel coordinates through the single
//! fixed scale of 96 device-independent pixels per inch, so all primitives
//! in one drawing are internally consistent regardless of the input unit.

use crate::constants::*;
use crate::page::PageSize;

/// The measurement system a page size's spacing inputs are authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Inch-based inputs (US Letter)
    Imperial,
    /// Millimeter-based inputs (A4)
    Metric,
}

impl UnitSystem {
    /// The unit system associated with a page size
    pub fn for_page(size: PageSize) -> Self {
        match size {
            PageSize::Letter => UnitSystem::Imperial,
            PageSize::A4 => UnitSystem::Metric,
        }
    }

    /// Convert a value in this system's native unit to device pixels
    pub fn to_pixels(&self, value: f64) -> f64 {
        match self {
            UnitSystem::Imperial => inches_to_pixels(value),
            UnitSystem::Metric => mm_to_pixels(value),
        }
    }
}

/// Convert inches to device pixels
pub fn inches_to_pixels(value: f64) -> f64 {
    value * DPI
}

/// Convert millimeters to device pixels
pub fn mm_to_pixels(value: f64) -> f64 {
    (value / MM_PER_INCH) * DPI
}

/// Convert inches to millimeters, rounded to 0.1 mm.
///
/// The rounding keeps displayed values readable and must stay in lockstep
/// with [`mm_to_inches`] so repeated unit toggling does not drift.
pub fn inches_to_mm(value: f64) -> f64 {
    (value * MM_PER_INCH * 10.0).round() / 10.0
}

/// Convert millimeters to inches, snapped to the nearest 1/32 inch
pub fn mm_to_inches(value: f64) -> f64 {
    ((value / MM_PER_INCH) * 32.0).round() / 32.0
}

/// Render an inch value for display: common fractional marks within 0.001
/// inch become a fraction string, everything else gets three decimals
pub fn format_inches(value: f64) -> String {
    for (num, den) in NICE_FRACTIONS {
        if (value - num as f64 / den as f64).abs() < FRACTION_SNAP_TOLERANCE {
            return format!("{num}/{den}");
        }
    }
    format!("{value:.3}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_scale() {
        assert_eq!(inches_to_pixels(1.0), 96.0);
        assert_eq!(inches_to_pixels(8.5), 816.0);
        assert!((mm_to_pixels(25.4) - 96.0).abs() < 1e-12);
    }

    #[test]
    fn test_inch_to_mm_rounding() {
        // 11/32 in = 8.73125 mm exactly; display rounds to tenths
        assert_eq!(inches_to_mm(11.0 / 32.0), 8.7);
        assert_eq!(inches_to_mm(0.25), 6.4);
        assert_eq!(inches_to_mm(9.0 / 32.0), 7.1);
    }

    #[test]
    fn test_mm_to_inch_snaps_to_32nds() {
        assert_eq!(mm_to_inches(8.7), 11.0 / 32.0);
        assert_eq!(mm_to_inches(6.4), 0.25);
        assert_eq!(mm_to_inches(12.7), 0.5);
    }

    #[test]
    fn test_round_trip_is_stable() {
        // A full toggle cycle may lose at most one 1/32 in rounding step,
        // and a second cycle must reproduce the first (no drift)
        for (num, den) in NICE_FRACTIONS {
            let original = num as f64 / den as f64;
            let once = mm_to_inches(inches_to_mm(original));
            assert!(
                (once - original).abs() <= 1.0 / 32.0 + 1e-9,
                "{num}/{den} drifted to {once}"
            );
            let twice = mm_to_inches(inches_to_mm(once));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_format_inches_fractions() {
        assert_eq!(format_inches(11.0 / 32.0), "11/32");
        assert_eq!(format_inches(0.25), "1/4");
        assert_eq!(format_inches(0.5), "1/2");
        // Just outside the snap tolerance
        assert_eq!(format_inches(0.253), "0.253");
        assert_eq!(format_inches(0.3), "0.300");
    }

    #[test]
    fn test_unit_system_for_page() {
        assert_eq!(UnitSystem::for_page(PageSize::Letter), UnitSystem::Imperial);
        assert_eq!(UnitSystem::for_page(PageSize::A4), UnitSystem::Metric);
        assert_eq!(UnitSystem::Imperial.to_pixels(0.25), 24.0);
        assert!((UnitSystem::Metric.to_pixels(5.0) - 5.0 / 25.4 * 96.0).abs() < 1e-12);
    }
}
