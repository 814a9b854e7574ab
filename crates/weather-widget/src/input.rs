//! User input validation for city searches.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::WeatherError;

fn city_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-ZÀ-ž\s.,'-]+$").expect("city pattern compiles")
    })
}

/// Validates a typed city name: trimmed, at least two characters, letters
/// and basic punctuation only.
pub fn validate_city(raw: &str) -> Result<&str, WeatherError> {
    let city = raw.trim();
    if city.is_empty() {
        return Err(WeatherError::InvalidInput(
            "Please enter a city name.".to_owned(),
        ));
    }
    if city.chars().count() < 2 {
        return Err(WeatherError::InvalidInput(
            "City name must be at least 2 characters.".to_owned(),
        ));
    }
    if !city_pattern().is_match(city) {
        return Err(WeatherError::InvalidInput(
            "Please use only letters and basic punctuation.".to_owned(),
        ));
    }
    Ok(city)
}
