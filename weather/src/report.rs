//! Plain-text rendering of current conditions
//!
//! The text block produced here is the payload the pipeline's weather stage
//! hands to the report composer. Layout:
//!
//! ```text
//! In Paris, the current weather is as follows:
//! Detailed status: light rain
//! Wind speed: 4.1 m/s, direction: 230°
//! Humidity: 81%
//! Temperature:
//!   - Current: 14.2°C
//!   - High: 15.1°C
//!   - Low: 12.9°C
//!   - Feels like: 13.6°C
//! Rain: 1h: 0.4 mm
//! Cloud cover: 90%
//! ```

use crate::model::{CurrentWeather, Precipitation, Units};
use std::fmt::Write;

/// Render `weather` for the place the caller asked about
#[must_use]
pub fn format_report(location: &str, weather: &CurrentWeather, units: Units) -> String {
    let temp = units.temperature_suffix();
    let main = &weather.main;

    let mut out = String::new();
    let _ = writeln!(out, "In {location}, the current weather is as follows:");
    let _ = writeln!(out, "Detailed status: {}", weather.detailed_status());
    let _ = writeln!(
        out,
        "Wind speed: {} {}, direction: {}°",
        weather.wind.speed,
        units.speed_suffix(),
        weather.wind.deg
    );
    let _ = writeln!(out, "Humidity: {}%", main.humidity);
    let _ = writeln!(out, "Temperature:");
    let _ = writeln!(out, "  - Current: {}{temp}", main.temp);
    let _ = writeln!(out, "  - High: {}{temp}", main.temp_max);
    let _ = writeln!(out, "  - Low: {}{temp}", main.temp_min);
    let _ = writeln!(out, "  - Feels like: {}{temp}", main.feels_like);
    let _ = writeln!(out, "Rain: {}", precipitation(weather.rain.as_ref()));
    if let Some(snow) = weather.snow.as_ref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "Snow: {}", precipitation(Some(snow)));
    }
    let _ = write!(out, "Cloud cover: {}%", weather.clouds.all);
    out
}

fn precipitation(volume: Option<&Precipitation>) -> String {
    let Some(volume) = volume.filter(|v| !v.is_empty()) else {
        return "none".to_string();
    };

    let windows: Vec<String> = [("1h", volume.one_hour), ("3h", volume.three_hours)]
        .into_iter()
        .filter_map(|(window, mm)| mm.map(|mm| format!("{window}: {mm} mm")))
        .collect();
    windows.join(", ")
}
