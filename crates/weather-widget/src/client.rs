//! HTTP client for the OpenWeatherMap endpoints the widget uses.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ApiMessage, CurrentWeather, ForecastResponse, GeoPlace};
use crate::error::WeatherError;
use crate::input::validate_city;

/// Geocoding endpoint.
pub const DEFAULT_GEO_URL: &str = "https://api.openweathermap.org/geo/1.0/direct";
/// Current-weather endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
/// 5-day forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Geocoding candidates requested per search.
const GEOCODE_LIMIT: u8 = 5;

/// Client for the weather API. All requests use metric units.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    api_key: String,
    geo_url: String,
    weather_url: String,
    forecast_url: String,
}

impl WeatherClient {
    /// Client against the public API.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            geo_url: DEFAULT_GEO_URL.to_owned(),
            weather_url: DEFAULT_WEATHER_URL.to_owned(),
            forecast_url: DEFAULT_FORECAST_URL.to_owned(),
        }
    }

    /// Client against alternate endpoints (tests, proxies).
    pub fn with_endpoints(
        api_key: impl Into<String>,
        geo_url: impl Into<String>,
        weather_url: impl Into<String>,
        forecast_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            geo_url: geo_url.into(),
            weather_url: weather_url.into(),
            forecast_url: forecast_url.into(),
        }
    }

    /// The configured geocoding endpoint.
    #[must_use]
    pub fn geo_url(&self) -> &str {
        &self.geo_url
    }

    /// Geocodes a typed city into up to five candidates.
    ///
    /// Validates the input first; an empty candidate list is an error the
    /// widget shows as "not found".
    pub async fn geocode(&self, raw_city: &str) -> Result<Vec<GeoPlace>, WeatherError> {
        let city = validate_city(raw_city)?;
        debug!(city, "geocoding");
        let limit = GEOCODE_LIMIT.to_string();
        let response = self
            .http
            .get(&self.geo_url)
            .query(&[
                ("q", city),
                ("limit", limit.as_str()),
                ("appid", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let places: Vec<GeoPlace> = Self::json(response).await?;
        if places.is_empty() {
            return Err(WeatherError::LocationNotFound);
        }
        Ok(places)
    }

    /// Current weather at a coordinate.
    pub async fn current(&self, lat: f64, lon: f64) -> Result<CurrentWeather, WeatherError> {
        debug!(lat, lon, "fetching current weather");
        let response = self
            .http
            .get(&self.weather_url)
            .query(&self.coordinate_params(lat, lon))
            .send()
            .await?;
        Self::json(response).await
    }

    /// 3-hour forecast slots at a coordinate.
    pub async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse, WeatherError> {
        debug!(lat, lon, "fetching forecast");
        let response = self
            .http
            .get(&self.forecast_url)
            .query(&self.coordinate_params(lat, lon))
            .send()
            .await?;
        Self::json(response).await
    }

    fn coordinate_params(&self, lat: f64, lon: f64) -> [(&'static str, String); 4] {
        [
            ("lat", lat.to_string()),
            ("lon", lon.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_owned()),
        ]
    }

    async fn json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, WeatherError> {
        let status = response.status();
        if !status.is_success() {
            let mut message = status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned();
            if let Ok(payload) = response.json::<ApiMessage>().await {
                if let Some(reason) = payload.message {
                    message = format!("{message} - {reason}");
                }
            }
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}
