//! Response models for thecolorapi.com.
//!
//! Fields the page does not strictly need are optional; the API omits or
//! nulls sections for edge-case inputs and the widget degrades to "N/A".

use serde::Deserialize;

/// `/id` response: everything known about one color.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorInfo {
    /// Hex representation.
    pub hex: Option<HexField>,
    /// Human-readable color name.
    pub name: Option<NameField>,
    /// RGB components.
    pub rgb: Option<RgbField>,
    /// HSL components.
    pub hsl: Option<HslField>,
    /// CMYK components.
    pub cmyk: Option<CmykField>,
}

impl ColorInfo {
    /// The canonical hex value (`#rrggbb`), when the API provided one.
    #[must_use]
    pub fn hex_value(&self) -> Option<&str> {
        self.hex.as_ref().map(|h| h.value.as_str())
    }
}

/// Hex section.
#[derive(Debug, Clone, Deserialize)]
pub struct HexField {
    /// `#rrggbb`.
    pub value: String,
    /// `rrggbb` without the hash.
    pub clean: Option<String>,
}

/// Name section.
#[derive(Debug, Clone, Deserialize)]
pub struct NameField {
    /// The color's name (closest named color).
    pub value: String,
}

/// RGB section.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RgbField {
    /// Red, 0-255.
    pub r: u8,
    /// Green, 0-255.
    pub g: u8,
    /// Blue, 0-255.
    pub b: u8,
}

/// HSL section.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct HslField {
    /// Hue, 0-360.
    pub h: u16,
    /// Saturation percentage.
    pub s: u8,
    /// Lightness percentage.
    pub l: u8,
}

/// CMYK section.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CmykField {
    /// Cyan percentage.
    pub c: u8,
    /// Magenta percentage.
    pub m: u8,
    /// Yellow percentage.
    pub y: u8,
    /// Key (black) percentage.
    pub k: u8,
}

/// `/scheme` response: a generated palette.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeResponse {
    /// The scheme mode that was applied.
    pub mode: Option<String>,
    /// Palette colors, in scheme order.
    #[serde(default)]
    pub colors: Vec<ColorInfo>,
}
