//! Colors - Popkit Default Palette

use gpui::{Rgba, rgb, rgba};
use serde::{Deserialize, Serialize};

/// Popkit color palette - All colors are accessed via associated functions
pub struct PopkitColors;

impl PopkitColors {
    // Overlay colors
    /// Popup dimming overlay - Black at 40%
    pub fn overlay() -> Rgba { rgba(0x00000066) }
    /// Indicator backdrop - Black at 70%
    pub fn backdrop() -> Rgba { rgba(0x000000b3) }

    // Popup colors
    /// Popup panel background
    pub fn panel_bg() -> Rgba { rgb(0xffffff) }
    /// Popup title text
    pub fn text_primary() -> Rgba { rgb(0x1f2937) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Toast colors
    /// Default toast background - Gray at 95%
    pub fn toast_bg() -> Rgba { rgba(0x808080f2) }
    /// Default toast text
    pub fn toast_text() -> Rgba { rgb(0xffffff) }

    // Indicator colors
    /// Default spinner tint
    pub fn spinner() -> Rgba { rgb(0x6b7280) }

    // Borders
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
}

/// A serializable color as r/g/b/a bytes
///
/// Style sheets carry colors in this form; components convert to `Rgba` at
/// render time. Alpha defaults to fully opaque when omitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "ColorSpec::opaque")]
    pub a: u8,
}

impl ColorSpec {
    fn opaque() -> u8 {
        255
    }

    /// Create a fully opaque color
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha
    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to a GPUI color
    pub fn to_rgba(self) -> Rgba {
        Rgba {
            r: f32::from(self.r) / 255.0,
            g: f32::from(self.g) / 255.0,
            b: f32::from(self.b) / 255.0,
            a: f32::from(self.a) / 255.0,
        }
    }

    /// Convert from a GPUI color
    pub fn from_rgba(color: Rgba) -> Self {
        let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: channel(color.r),
            g: channel(color.g),
            b: channel(color.b),
            a: channel(color.a),
        }
    }
}

impl From<ColorSpec> for Rgba {
    fn from(spec: ColorSpec) -> Self {
        spec.to_rgba()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_spec_to_rgba() {
        let spec = ColorSpec::with_alpha(128, 128, 128, 242);
        let rgba = spec.to_rgba();
        assert!((rgba.r - 128.0 / 255.0).abs() < f32::EPSILON);
        assert!((rgba.a - 242.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_color_spec_round_trip() {
        let spec = ColorSpec::new(34, 197, 94);
        assert_eq!(ColorSpec::from_rgba(spec.to_rgba()), spec);
    }

    #[test]
    fn test_color_spec_alpha_defaults_opaque() {
        let spec: ColorSpec =
            toml::from_str("r = 10\ng = 20\nb = 30").expect("color without alpha should parse");
        assert_eq!(spec.a, 255);
    }
}
