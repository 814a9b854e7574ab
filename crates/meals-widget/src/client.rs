//! HTTP client for TheMealDB.

use tracing::debug;

use crate::api::{Meal, MealsResponse};
use crate::error::MealError;

/// Public API base (free-tier key `1` baked into the path).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Client for the meal API.
#[derive(Debug, Clone)]
pub struct MealClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for MealClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealClient {
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

    /// Searches meals by name. A blank query is rejected before any request.
    pub async fn search(&self, query: &str) -> Result<Vec<Meal>, MealError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(MealError::InvalidQuery(
                "Type a meal name or ingredient.".to_owned(),
            ));
        }
        let url = self.endpoint("search.php");
        debug!(url, query = trimmed, "searching meals");
        let response = self.http.get(&url).query(&[("s", trimmed)]).send().await?;
        Ok(Self::json(response).await?.into_meals())
    }

    /// Fetches one meal by ID.
    pub async fn lookup(&self, id: &str) -> Result<Option<Meal>, MealError> {
        let url = self.endpoint("lookup.php");
        debug!(url, id, "fetching meal");
        let response = self.http.get(&url).query(&[("i", id)]).send().await?;
        Ok(Self::json(response).await?.into_meals().into_iter().next())
    }

    /// Fetches a random meal.
    pub async fn random(&self) -> Result<Option<Meal>, MealError> {
        let url = self.endpoint("random.php");
        debug!(url, "fetching random meal");
        let response = self.http.get(&url).send().await?;
        Ok(Self::json(response).await?.into_meals().into_iter().next())
    }

    async fn json(response: reqwest::Response) -> Result<MealsResponse, MealError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MealError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}
