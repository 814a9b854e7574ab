//! Searches TheMealDB and prints the first match in detail.
//!
//! Run with: cargo run --example meal_search -- laksa

use meals_widget::{count_label, instructions, link_chips, meta_line, MealClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = MealClient::new();
    let meal = match std::env::args().nth(1) {
        Some(query) => {
            let meals = client.search(&query).await?;
            println!("{}", count_label(meals.len()));
            meals.into_iter().next()
        }
        None => client.random().await?,
    };

    let Some(meal) = meal else {
        println!("No meals found.");
        return Ok(());
    };

    println!("\n{}\n{}\n", meal.name, meta_line(&meal));
    for item in meal.ingredients() {
        println!("- {item}");
    }
    println!("\n{}", instructions(&meal));
    for (label, url) in link_chips(&meal) {
        println!("{label}: {url}");
    }

    Ok(())
}
