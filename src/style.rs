//! Stroke color and appearance settings

/// RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// The fixed red used for the notebook accent line
    pub const fn accent_red() -> Self {
        Self::rgb(255, 0, 0)
    }

    /// The classic blue rule color
    pub const fn rule_blue() -> Self {
        Self::rgb(0, 0, 255)
    }

    /// Parse a hex color like "#RRGGBB" (leading '#' optional)
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Format as a lowercase "#rrggbb" string
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels normalized to 0.0-1.0, as PDF color operators expect
    pub fn to_normalized(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rule_blue()
    }
}

/// Stroke appearance shared by every pattern variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    /// Stroke (and dot fill) color
    pub color: Color,
    /// Base stroke thickness in device pixels
    pub thickness: f64,
}

impl Appearance {
    /// Create an appearance with the given color and thickness
    pub fn new(color: Color, thickness: f64) -> Self {
        Self { color, thickness }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            color: Color::rule_blue(),
            thickness: 1.0,
        }
    }
}
