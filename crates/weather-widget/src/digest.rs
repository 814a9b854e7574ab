//! Pure projections: location strings, the current-weather report, and the
//! five-day digest of the 3-hour forecast.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};

use crate::api::{CurrentWeather, ForecastSlot, GeoPlace};

/// Days shown in the forecast strip.
const FORECAST_DAYS: usize = 5;

/// `Name, State, Country` (state omitted when unknown).
#[must_use]
pub fn format_location(place: &GeoPlace) -> String {
    let state = place
        .state
        .as_deref()
        .map(|s| format!(", {s}"))
        .unwrap_or_default();
    let country = place.country.as_deref().unwrap_or_default();
    format!("{}{state}, {country}", place.name)
}

/// The current-weather panel, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City plus state suffix.
    pub city: String,
    /// Country code, possibly empty.
    pub country: String,
    /// Condition description.
    pub description: String,
    /// Temperature, rounded to whole degrees.
    pub temp: i64,
    /// Perceived temperature, rounded to whole degrees.
    pub feels_like: i64,
    /// Relative humidity percentage.
    pub humidity: i64,
    /// Wind speed, one decimal.
    pub wind_speed: f64,
}

impl WeatherReport {
    /// Builds the report, preferring the geocoded place for naming and
    /// falling back to what the weather payload carries.
    #[must_use]
    pub fn build(weather: &CurrentWeather, place: Option<&GeoPlace>) -> Self {
        let city_name = place
            .map(|p| p.name.clone())
            .or_else(|| weather.name.clone())
            .unwrap_or_else(|| "Unknown".to_owned());
        let state = place
            .and_then(|p| p.state.as_deref())
            .map(|s| format!(", {s}"))
            .unwrap_or_default();
        let country = place
            .and_then(|p| p.country.clone())
            .or_else(|| weather.sys.as_ref().and_then(|s| s.country.clone()))
            .unwrap_or_default();

        let main = weather.main;
        let wind_speed = weather.wind.and_then(|w| w.speed).unwrap_or(0.0);

        Self {
            city: format!("{city_name}{state}"),
            country,
            description: first_description(&weather.weather),
            temp: round_whole(main.and_then(|m| m.temp)),
            feels_like: round_whole(main.and_then(|m| m.feels_like)),
            humidity: round_whole(main.and_then(|m| m.humidity)),
            wind_speed: (wind_speed * 10.0).round() / 10.0,
        }
    }
}

/// One card in the forecast strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastCard {
    /// Day label, e.g. `Mon Dec 8`.
    pub day: String,
    /// Temperature, rounded to whole degrees.
    pub temp: i64,
    /// Condition description.
    pub description: String,
}

/// Picks one representative slot per UTC day (the slot closest to noon),
/// for at most five days, in chronological order.
#[must_use]
pub fn daily_picks(slots: &[ForecastSlot]) -> Vec<&ForecastSlot> {
    let mut days: Vec<(NaiveDate, &ForecastSlot, u32)> = Vec::new();

    for slot in slots {
        let Some(when) = DateTime::<Utc>::from_timestamp(slot.dt, 0) else {
            continue;
        };
        let date = when.date_naive();
        let distance = when.hour().abs_diff(12);

        match days.iter_mut().find(|(d, _, _)| *d == date) {
            Some(entry) => {
                if distance < entry.2 {
                    entry.1 = slot;
                    entry.2 = distance;
                }
            }
            None => days.push((date, slot, distance)),
        }
    }

    days.into_iter()
        .take(FORECAST_DAYS)
        .map(|(_, slot, _)| slot)
        .collect()
}

/// Day label for a forecast timestamp, e.g. `Mon Dec 8`.
#[must_use]
pub fn day_label(unix_seconds: i64) -> String {
    match DateTime::<Utc>::from_timestamp(unix_seconds, 0) {
        Some(when) => format!("{} {} {}", when.format("%a"), when.format("%b"), when.day()),
        None => "?".to_owned(),
    }
}

/// Builds the forecast strip from the raw slots.
#[must_use]
pub fn forecast_cards(slots: &[ForecastSlot]) -> Vec<ForecastCard> {
    daily_picks(slots)
        .into_iter()
        .map(|slot| ForecastCard {
            day: day_label(slot.dt),
            temp: round_whole(slot.main.and_then(|m| m.temp)),
            description: first_description(&slot.weather),
        })
        .collect()
}

fn first_description(conditions: &[crate::api::Condition]) -> String {
    conditions
        .first()
        .and_then(|c| c.description.clone())
        .unwrap_or_else(|| "N/A".to_owned())
}

fn round_whole(value: Option<f64>) -> i64 {
    value.unwrap_or(0.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Condition, MainMetrics, Sys, Wind};

    fn slot(dt: i64, temp: f64, description: &str) -> ForecastSlot {
        ForecastSlot {
            dt,
            main: Some(MainMetrics {
                temp: Some(temp),
                feels_like: None,
                humidity: None,
            }),
            weather: vec![Condition {
                description: Some(description.to_owned()),
            }],
        }
    }

    fn place() -> GeoPlace {
        GeoPlace {
            name: "Berlin".to_owned(),
            lat: 52.52,
            lon: 13.405,
            state: Some("Berlin".to_owned()),
            country: Some("DE".to_owned()),
        }
    }

    // 2024-12-02 00:00:00 UTC, a Monday.
    const MONDAY_MIDNIGHT: i64 = 1_733_097_600;
    const HOUR: i64 = 3_600;
    const DAY: i64 = 86_400;

    #[test]
    fn test_format_location() {
        assert_eq!(format_location(&place()), "Berlin, Berlin, DE");

        let mut no_state = place();
        no_state.state = None;
        assert_eq!(format_location(&no_state), "Berlin, DE");
    }

    #[test]
    fn test_report_prefers_geocoded_place() {
        let weather = CurrentWeather {
            weather: vec![Condition {
                description: Some("light rain".to_owned()),
            }],
            main: Some(MainMetrics {
                temp: Some(18.4),
                feels_like: Some(17.6),
                humidity: Some(72.0),
            }),
            wind: Some(Wind { speed: Some(4.64) }),
            name: Some("Somewhere".to_owned()),
            sys: Some(Sys {
                country: Some("XX".to_owned()),
            }),
        };
        let report = WeatherReport::build(&weather, Some(&place()));
        assert_eq!(report.city, "Berlin, Berlin");
        assert_eq!(report.country, "DE");
        assert_eq!(report.description, "light rain");
        assert_eq!(report.temp, 18);
        assert_eq!(report.feels_like, 18);
        assert_eq!(report.humidity, 72);
        assert_eq!(report.wind_speed, 4.6);
    }

    #[test]
    fn test_report_falls_back_to_payload() {
        let weather = CurrentWeather {
            weather: vec![],
            main: None,
            wind: None,
            name: Some("Lagos".to_owned()),
            sys: Some(Sys {
                country: Some("NG".to_owned()),
            }),
        };
        let report = WeatherReport::build(&weather, None);
        assert_eq!(report.city, "Lagos");
        assert_eq!(report.country, "NG");
        assert_eq!(report.description, "N/A");
        assert_eq!(report.temp, 0);
        assert_eq!(report.wind_speed, 0.0);
    }

    #[test]
    fn test_daily_picks_choose_noon() {
        let slots = vec![
            slot(MONDAY_MIDNIGHT, 1.0, "dawn"),
            slot(MONDAY_MIDNIGHT + 9 * HOUR, 2.0, "morning"),
            slot(MONDAY_MIDNIGHT + 12 * HOUR, 3.0, "noon"),
            slot(MONDAY_MIDNIGHT + 21 * HOUR, 4.0, "night"),
        ];
        let picks = daily_picks(&slots);
        assert_eq!(picks.len(), 1);
        assert_eq!(picks[0].weather[0].description.as_deref(), Some("noon"));
    }

    #[test]
    fn test_daily_picks_cap_at_five_days() {
        let mut slots = Vec::new();
        for day in 0..7 {
            for hour in [6, 12, 18] {
                slots.push(slot(
                    MONDAY_MIDNIGHT + day * DAY + hour * HOUR,
                    day as f64,
                    "x",
                ));
            }
        }
        let picks = daily_picks(&slots);
        assert_eq!(picks.len(), 5);
        // Chronological, one per day, each the noon slot.
        for (i, pick) in picks.iter().enumerate() {
            assert_eq!(pick.dt, MONDAY_MIDNIGHT + i as i64 * DAY + 12 * HOUR);
        }
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(MONDAY_MIDNIGHT), "Mon Dec 2");
        assert_eq!(day_label(MONDAY_MIDNIGHT + 3 * DAY), "Thu Dec 5");
    }

    #[test]
    fn test_forecast_cards() {
        let slots = vec![
            slot(MONDAY_MIDNIGHT + 12 * HOUR, 3.4, "snow"),
            slot(MONDAY_MIDNIGHT + DAY + 12 * HOUR, -0.6, "clear sky"),
        ];
        let cards = forecast_cards(&slots);
        assert_eq!(
            cards,
            vec![
                ForecastCard {
                    day: "Mon Dec 2".to_owned(),
                    temp: 3,
                    description: "snow".to_owned(),
                },
                ForecastCard {
                    day: "Tue Dec 3".to_owned(),
                    temp: -1,
                    description: "clear sky".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_forecast() {
        assert!(forecast_cards(&[]).is_empty());
    }
}
