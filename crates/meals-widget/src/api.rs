//! Response models for TheMealDB.
//!
//! A meal is one flat JSON object with twenty numbered ingredient and
//! measure columns (`strIngredient1..20`, `strMeasure1..20`). The columns
//! the widget renders by name get fields; the numbered ones land in a
//! flattened map and are paired up by [`Meal::ingredients`].

use std::collections::HashMap;

use serde::Deserialize;

/// Columns per meal in the upstream schema.
const INGREDIENT_COLUMNS: usize = 20;

/// One meal record.
#[derive(Debug, Clone, Deserialize)]
pub struct Meal {
    /// Meal ID, used for detail lookups.
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Meal name.
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Category ("Seafood").
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    /// Cuisine area ("Malaysian").
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    /// Comma-separated tags.
    #[serde(rename = "strTags")]
    pub tags: Option<String>,
    /// Thumbnail URL.
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
    /// Free-text cooking instructions.
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    /// YouTube link, when present.
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Source link, when present.
    #[serde(rename = "strSource")]
    pub source: Option<String>,
    /// The remaining columns, including the numbered ingredient pairs.
    #[serde(flatten)]
    pub extra: HashMap<String, Option<String>>,
}

impl Meal {
    /// Pairs the numbered ingredient and measure columns, skipping blanks.
    ///
    /// Each entry renders as `Name - measure`, or just `Name` when the
    /// measure column is blank.
    #[must_use]
    pub fn ingredients(&self) -> Vec<String> {
        let mut list = Vec::new();
        for i in 1..=INGREDIENT_COLUMNS {
            let name = self.column(&format!("strIngredient{i}"));
            let Some(name) = name else { continue };
            match self.column(&format!("strMeasure{i}")) {
                Some(measure) => list.push(format!("{name} - {measure}")),
                None => list.push(name.to_owned()),
            }
        }
        list
    }

    /// A trimmed, non-blank extra column.
    fn column(&self, key: &str) -> Option<&str> {
        self.extra
            .get(key)
            .and_then(Option::as_deref)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Envelope for every endpoint: `meals` is `null` when nothing matched.
#[derive(Debug, Clone, Deserialize)]
pub struct MealsResponse {
    /// The matched meals, or none.
    pub meals: Option<Vec<Meal>>,
}

impl MealsResponse {
    /// The meals, with `null` collapsed to empty.
    #[must_use]
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}
