//! Looks up a color (argument or random) and prints its card and palette.
//!
//! Run with: cargo run --example color_lookup -- "#4f46e5"

use color_widget::{palette_hex, ColorCard, ColorClient, ColorQuery, SchemeMode};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(color_widget::random_hex);
    let query = ColorQuery::parse(&raw)?;

    let client = ColorClient::new();
    let info = client.lookup(&query).await?;
    let card = ColorCard::from_info(&info);
    for line in card.lines() {
        println!("{line}");
    }

    let scheme = client
        .scheme(&card.hex, SchemeMode::AnalogicComplement, 5)
        .await?;
    println!("\npalette ({}):", scheme.mode.as_deref().unwrap_or("?"));
    for color in &scheme.colors {
        println!("  {}", palette_hex(color));
    }

    Ok(())
}
