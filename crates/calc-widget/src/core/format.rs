//! Display formatting for computed results.

/// Literal rendered for any failed computation.
pub const ERROR_DISPLAY: &str = "Error";

/// Computed results keep 12 decimal digits on screen.
const ROUNDING_SCALE: f64 = 1e12;

/// Formats a computed result for the display line.
///
/// Rounds to 12 decimal digits to suppress binary floating-point noise
/// (`0.1 + 0.2` renders as `0.3`), then renders the shortest decimal string
/// that round-trips. Only computed results go through here; digits the user
/// typed are shown verbatim.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_DISPLAY.to_owned();
    }
    let scaled = (value + f64::EPSILON) * ROUNDING_SCALE;
    if scaled.is_finite() {
        (scaled.round() / ROUNDING_SCALE).to_string()
    } else {
        // Magnitudes that overflow the scaling carry no fractional noise at
        // 12 decimal digits; rounding would be the identity.
        value.to_string()
    }
}
