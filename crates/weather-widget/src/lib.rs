//! Weather lookup widget: a thin typed wrapper over OpenWeatherMap.
//!
//! Validates the typed city, geocodes it into candidate places, fetches the
//! current conditions plus the 3-hour forecast, and digests them into the
//! strings the widget renders: a current-weather report and a five-day strip
//! (one slot per day, the one closest to noon).
//!
//! ```no_run
//! # async fn demo() -> Result<(), weather_widget::WeatherError> {
//! use weather_widget::{forecast_cards, WeatherClient, WeatherReport};
//!
//! let client = WeatherClient::new("api-key");
//! let places = client.geocode("Berlin").await?;
//! let place = &places[0];
//!
//! let current = client.current(place.lat, place.lon).await?;
//! let report = WeatherReport::build(&current, Some(place));
//! println!("{}: {}°C, {}", report.city, report.temp, report.description);
//!
//! let forecast = client.forecast(place.lat, place.lon).await?;
//! for card in forecast_cards(&forecast.list) {
//!     println!("{}: {}°C {}", card.day, card.temp, card.description);
//! }
//! # Ok(())
//! # }
//! ```

#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod api;
pub mod client;
pub mod digest;
pub mod error;
pub mod input;

pub use api::{CurrentWeather, ForecastResponse, ForecastSlot, GeoPlace};
pub use client::WeatherClient;
pub use digest::{daily_picks, day_label, forecast_cards, format_location, ForecastCard, WeatherReport};
pub use error::WeatherError;
pub use input::validate_city;
