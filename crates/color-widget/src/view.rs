//! Display projections: the color card and palette rows.

use crate::api::ColorInfo;

/// The detail card the widget renders for one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorCard {
    /// Color name, or `Unknown`.
    pub name: String,
    /// Hex value, or `#000000`.
    pub hex: String,
    /// `rgb(r, g, b)`, or `N/A`.
    pub rgb: String,
    /// `hsl(h, s%, l%)`, or `N/A`.
    pub hsl: String,
    /// `cmyk(c%, m%, y%, k%)`, or `N/A`.
    pub cmyk: String,
}

impl ColorCard {
    /// Builds the card, substituting placeholders for missing sections.
    #[must_use]
    pub fn from_info(info: &ColorInfo) -> Self {
        Self {
            name: info
                .name
                .as_ref()
                .map_or_else(|| "Unknown".to_owned(), |n| n.value.clone()),
            hex: info
                .hex_value()
                .map_or_else(|| "#000000".to_owned(), ToOwned::to_owned),
            rgb: info
                .rgb
                .map_or_else(|| "N/A".to_owned(), |c| format!("rgb({}, {}, {})", c.r, c.g, c.b)),
            hsl: info
                .hsl
                .map_or_else(|| "N/A".to_owned(), |c| format!("hsl({}, {}%, {}%)", c.h, c.s, c.l)),
            cmyk: info.cmyk.map_or_else(
                || "N/A".to_owned(),
                |c| format!("cmyk({}%, {}%, {}%, {}%)", c.c, c.m, c.y, c.k),
            ),
        }
    }

    /// The card as display lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.hex.clone(),
            self.rgb.clone(),
            self.hsl.clone(),
            self.cmyk.clone(),
        ]
    }
}

/// One palette row: the hex chip text for a scheme color.
#[must_use]
pub fn palette_hex(info: &ColorInfo) -> String {
    info.hex_value().unwrap_or("#000000").to_owned()
}
