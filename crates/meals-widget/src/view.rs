//! Display projections for meal cards and the detail pane.

use crate::api::Meal;

/// The meta line under a meal title: `Category • Area • Tags`, with
/// placeholder words where the record is blank.
#[must_use]
pub fn meta_line(meal: &Meal) -> String {
    format!(
        "{} • {} • {}",
        meal.category.as_deref().unwrap_or("Category"),
        meal.area.as_deref().unwrap_or("Area"),
        meal.tags.as_deref().unwrap_or("Tags"),
    )
}

/// The result-count label: `—` for none, otherwise `N meal(s)`.
#[must_use]
pub fn count_label(count: usize) -> String {
    match count {
        0 => "—".to_owned(),
        1 => "1 meal".to_owned(),
        n => format!("{n} meals"),
    }
}

/// External link chips for the detail pane: label plus URL.
#[must_use]
pub fn link_chips(meal: &Meal) -> Vec<(&'static str, &str)> {
    let mut chips = Vec::new();
    if let Some(url) = meal.youtube.as_deref() {
        chips.push(("Watch on YouTube", url));
    }
    if let Some(url) = meal.source.as_deref() {
        chips.push(("Source", url));
    }
    chips
}

/// The instructions text, with a placeholder for blank records.
#[must_use]
pub fn instructions(meal: &Meal) -> &str {
    meal.instructions
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("No instructions provided.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn meal() -> Meal {
        Meal {
            id: "1".to_owned(),
            name: "Laksa".to_owned(),
            category: Some("Seafood".to_owned()),
            area: Some("Malaysian".to_owned()),
            tags: None,
            thumb: None,
            instructions: Some("Simmer everything.".to_owned()),
            youtube: Some("https://youtube.com/x".to_owned()),
            source: None,
            extra: HashMap::new(),
        }
    }

    #[test]
    fn test_meta_line() {
        assert_eq!(meta_line(&meal()), "Seafood • Malaysian • Tags");
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "—");
        assert_eq!(count_label(1), "1 meal");
        assert_eq!(count_label(12), "12 meals");
    }

    #[test]
    fn test_link_chips() {
        let binding = meal();
        let chips = link_chips(&binding);
        assert_eq!(chips, vec![("Watch on YouTube", "https://youtube.com/x")]);

        let mut with_source = meal();
        with_source.source = Some("https://example.com".to_owned());
        assert_eq!(link_chips(&with_source).len(), 2);
    }

    #[test]
    fn test_instructions_placeholder() {
        assert_eq!(instructions(&meal()), "Simmer everything.");

        let mut blank = meal();
        blank.instructions = Some("   ".to_owned());
        assert_eq!(instructions(&blank), "No instructions provided.");
        blank.instructions = None;
        assert_eq!(instructions(&blank), "No instructions provided.");
    }
}
