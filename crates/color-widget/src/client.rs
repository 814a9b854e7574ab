//! HTTP client for thecolorapi.com.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::api::{ColorInfo, SchemeResponse};
use crate::error::ColorError;
use crate::input::ColorQuery;

/// Public API host. No key required.
pub const DEFAULT_BASE_URL: &str = "https://www.thecolorapi.com";

/// Palette scheme modes the API understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeMode {
    /// Neighboring hues.
    Analogic,
    /// Neighboring hues plus the complement.
    AnalogicComplement,
    /// The direct complement.
    Complement,
    /// Single-hue variations.
    Monochrome,
    /// Three evenly spaced hues.
    Triad,
    /// Four evenly spaced hues.
    Quad,
}

impl SchemeMode {
    /// The query-string value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Analogic => "analogic",
            Self::AnalogicComplement => "analogic-complement",
            Self::Complement => "complement",
            Self::Monochrome => "monochrome",
            Self::Triad => "triad",
            Self::Quad => "quad",
        }
    }
}

/// Client for the color API.
#[derive(Debug, Clone)]
pub struct ColorClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for ColorClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorClient {
    /// Client against the public API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client against an alternate host (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The configured host.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Looks up everything the API knows about one color.
    pub async fn lookup(&self, query: &ColorQuery) -> Result<ColorInfo, ColorError> {
        let url = self.endpoint("id");
        let (key, value) = query.query_param();
        debug!(url, key, value, "fetching color info");
        let response = self.http.get(&url).query(&[(key, value)]).send().await?;
        Self::json(response).await
    }

    /// Generates a palette around a hex color.
    pub async fn scheme(
        &self,
        hex: &str,
        mode: SchemeMode,
        count: u8,
    ) -> Result<SchemeResponse, ColorError> {
        let url = self.endpoint("scheme");
        let clean = hex.trim_start_matches('#');
        debug!(url, clean, mode = mode.as_str(), count, "fetching palette");
        let count = count.to_string();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("hex", clean),
                ("mode", mode.as_str()),
                ("count", count.as_str()),
            ])
            .send()
            .await?;
        Self::json(response).await
    }

    async fn json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ColorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ColorError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
