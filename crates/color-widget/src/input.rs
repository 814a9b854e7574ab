//! User input validation for color lookups.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ColorError;

const EMPTY_HINT: &str = "Enter a HEX like #4f46e5 or rgb(79,70,229)";
const FORMAT_HINT: &str = "Invalid format. Try #4f46e5 or rgb(79,70,229)";

fn hex_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#?[0-9a-fA-F]{3}([0-9a-fA-F]{3})?$").expect("hex pattern compiles")
    })
}

fn rgb_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^rgb\s*\(\s*\d+\s*,\s*\d+\s*,\s*\d+\s*\)$").expect("rgb pattern compiles")
    })
}

/// A validated color query: 3- or 6-digit hex (hash optional) or `rgb(r,g,b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorQuery {
    /// Hex digits, without the leading hash.
    Hex(String),
    /// The raw `rgb(...)` text, as the API accepts it verbatim.
    Rgb(String),
}

impl ColorQuery {
    /// Validates user text into a query.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(ColorError::InvalidInput(EMPTY_HINT.to_owned()));
        }
        if hex_pattern().is_match(value) {
            return Ok(Self::Hex(value.trim_start_matches('#').to_owned()));
        }
        if rgb_pattern().is_match(value) {
            return Ok(Self::Rgb(value.to_owned()));
        }
        Err(ColorError::InvalidInput(FORMAT_HINT.to_owned()))
    }

    /// The query-string parameter this resolves to.
    #[must_use]
    pub fn query_param(&self) -> (&'static str, &str) {
        match self {
            Self::Hex(hex) => ("hex", hex.as_str()),
            Self::Rgb(rgb) => ("rgb", rgb.as_str()),
        }
    }
}

/// A random 6-digit hex color, hash included.
///
/// Randomness comes from v4 UUID bytes; the widget needs "pick any color",
/// not a statistical guarantee.
#[must_use]
pub fn random_hex() -> String {
    let bytes = uuid::Uuid::new_v4().into_bytes();
    format!("#{:02x}{:02x}{:02x}", bytes[0], bytes[1], bytes[2])
}
