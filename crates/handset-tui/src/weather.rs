//! Open-Meteo weather feed.
//!
//! One-shot fetch of current conditions plus hourly and 7-day forecasts,
//! decoded from the Open-Meteo JSON shape into the renderer-facing
//! [`WeatherReport`]. Failures are reported to the app as a failure event
//! and the surface keeps showing its loading state.

use handset_app::{DayForecast, HourForecast, WeatherReport};
use serde::Deserialize;
use thiserror::Error;

/// Forecast endpoint. Coordinates point at the portfolio owner's city.
pub const DEFAULT_URL: &str = "https://api.open-meteo.com/v1/forecast\
?latitude=30.6942&longitude=76.8606\
&current=temperature_2m,weather_code,is_day\
&hourly=temperature_2m,weather_code\
&daily=weather_code,temperature_2m_max,temperature_2m_min\
&forecast_days=7&timezone=auto";

/// Hourly slots surfaced in the strip.
const HOURLY_SLOTS: usize = 24;

/// Weather fetch errors.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Request failed or the body was not the expected JSON shape.
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct Forecast {
    current: Current,
    hourly: Hourly,
    daily: Daily,
}

#[derive(Debug, Deserialize)]
struct Current {
    temperature_2m: f64,
    weather_code: u8,
    is_day: u8,
}

#[derive(Debug, Deserialize)]
struct Hourly {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    weather_code: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct Daily {
    time: Vec<String>,
    weather_code: Vec<u8>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

/// Fetch and decode the forecast.
///
/// # Errors
///
/// Returns an error if the request fails, the server answers with a
/// non-success status, or the body does not match the expected shape.
pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<WeatherReport, WeatherError> {
    let forecast: Forecast = client.get(url).send().await?.error_for_status()?.json().await?;
    Ok(convert(forecast))
}

fn convert(forecast: Forecast) -> WeatherReport {
    let hourly = forecast
        .hourly
        .time
        .iter()
        .zip(&forecast.hourly.temperature_2m)
        .zip(&forecast.hourly.weather_code)
        .take(HOURLY_SLOTS)
        .map(|((time, &temperature), &weather_code)| HourForecast {
            time: hour_label(time),
            weather_code,
            temperature,
        })
        .collect();

    let daily = forecast
        .daily
        .time
        .iter()
        .zip(&forecast.daily.weather_code)
        .zip(forecast.daily.temperature_2m_max.iter().zip(&forecast.daily.temperature_2m_min))
        .map(|((date, &weather_code), (&high, &low))| DayForecast {
            date: date.clone(),
            weather_code,
            high,
            low,
        })
        .collect();

    WeatherReport {
        temperature: forecast.current.temperature_2m,
        weather_code: forecast.current.weather_code,
        is_day: forecast.current.is_day != 0,
        hourly,
        daily,
    }
}

/// "2026-08-30T14:00" → "14:00".
fn hour_label(iso: &str) -> String {
    iso.split_once('T').map_or_else(|| iso.to_owned(), |(_, hm)| hm.to_owned())
}

/// Human label for a WMO weather code.
pub fn describe(code: u8) -> &'static str {
    match code {
        0 => "Clear",
        1..=3 => "Partly cloudy",
        45 | 48 => "Fog",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        71..=77 => "Snow",
        80..=82 => "Showers",
        85 | 86 => "Snow showers",
        95..=99 => "Thunderstorm",
        _ => "Unknown",
    }
}

/// Glyph for a WMO weather code, day/night aware for clear skies.
pub fn glyph(code: u8, is_day: bool) -> &'static str {
    match code {
        0 if is_day => "☀",
        0 => "🌙",
        1..=3 => "⛅",
        45 | 48 => "🌫",
        51..=67 | 80..=82 => "🌧",
        71..=77 | 85 | 86 => "🌨",
        95..=99 => "⛈",
        _ => "☁",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "current": {"temperature_2m": 31.4, "weather_code": 2, "is_day": 1},
        "hourly": {
            "time": ["2026-08-30T00:00", "2026-08-30T01:00"],
            "temperature_2m": [27.1, 26.5],
            "weather_code": [2, 3]
        },
        "daily": {
            "time": ["2026-08-30", "2026-08-31"],
            "weather_code": [2, 61],
            "temperature_2m_max": [33.0, 29.5],
            "temperature_2m_min": [26.0, 24.8]
        }
    }"#;

    #[test]
    fn decodes_open_meteo_shape() {
        let forecast: Forecast = serde_json::from_str(BODY).unwrap();
        let report = convert(forecast);

        assert!((report.temperature - 31.4).abs() < f64::EPSILON);
        assert!(report.is_day);
        assert_eq!(report.hourly.len(), 2);
        assert_eq!(report.hourly[0].time, "00:00");
        assert_eq!(report.daily.len(), 2);
        assert_eq!(report.daily[1].weather_code, 61);
        assert!((report.daily[1].low - 24.8).abs() < f64::EPSILON);
    }

    #[test]
    fn weather_codes_have_labels() {
        assert_eq!(describe(0), "Clear");
        assert_eq!(describe(63), "Rain");
        assert_eq!(describe(96), "Thunderstorm");
        assert_eq!(glyph(0, false), "🌙");
    }
}
