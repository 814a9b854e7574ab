//! Looks up current weather and the five-day digest for a city.
//!
//! Run with: OPENWEATHER_API_KEY=... cargo run --example weather_lookup -- Berlin

use weather_widget::{forecast_cards, format_location, WeatherClient, WeatherReport};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("OPENWEATHER_API_KEY")?;
    let city = std::env::args().nth(1).unwrap_or_else(|| "Berlin".to_owned());

    let client = WeatherClient::new(api_key);
    let places = client.geocode(&city).await?;
    for place in &places {
        println!("candidate: {}", format_location(place));
    }
    let place = &places[0];

    let current = client.current(place.lat, place.lon).await?;
    let report = WeatherReport::build(&current, Some(place));
    println!(
        "\n{} {}\n{}  {}°C (feels like {}°C)  humidity {}%  wind {} m/s",
        report.city,
        report.country,
        report.description,
        report.temp,
        report.feels_like,
        report.humidity,
        report.wind_speed
    );

    let forecast = client.forecast(place.lat, place.lon).await?;
    println!();
    for card in forecast_cards(&forecast.list) {
        println!("{:<12} {:>4}°C  {}", card.day, card.temp, card.description);
    }

    Ok(())
}
