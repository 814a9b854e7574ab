//! Response models for the OpenWeatherMap geocoding, current-weather, and
//! 3-hour-forecast endpoints. Only the fields the widget renders are
//! modeled; anything the API might omit is optional.

use serde::Deserialize;

/// One geocoding candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeoPlace {
    /// Place name.
    pub name: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Administrative area, when known.
    pub state: Option<String>,
    /// Country code, when known.
    pub country: Option<String>,
}

/// A weather condition entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Short description ("light rain").
    pub description: Option<String>,
}

/// Temperature and humidity block.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MainMetrics {
    /// Temperature (units follow the request; the widget asks for metric).
    pub temp: Option<f64>,
    /// Perceived temperature.
    pub feels_like: Option<f64>,
    /// Relative humidity percentage.
    pub humidity: Option<f64>,
}

/// Wind block.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Wind {
    /// Wind speed.
    pub speed: Option<f64>,
}

/// Country block of the current-weather response.
#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    /// Country code.
    pub country: Option<String>,
}

/// Current-weather response.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    /// Condition entries; the first is rendered.
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Temperature block.
    pub main: Option<MainMetrics>,
    /// Wind block.
    pub wind: Option<Wind>,
    /// Station/city name.
    pub name: Option<String>,
    /// Country block.
    pub sys: Option<Sys>,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastSlot {
    /// Unix timestamp (seconds) of the slot.
    pub dt: i64,
    /// Temperature block.
    pub main: Option<MainMetrics>,
    /// Condition entries.
    #[serde(default)]
    pub weather: Vec<Condition>,
}

/// Forecast response: 3-hour slots covering five days.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// The slots, in chronological order.
    #[serde(default)]
    pub list: Vec<ForecastSlot>,
}

/// Error payload the API sometimes attaches to non-2xx answers.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    /// Human-readable reason.
    pub message: Option<String>,
}
