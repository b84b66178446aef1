//! Current-weather payload as returned by the provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system requested from the provider
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Celsius, metres per second
    #[default]
    Metric,
    /// Fahrenheit, miles per hour
    Imperial,
    /// Kelvin, metres per second
    Standard,
}

impl Units {
    /// Value of the `units` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
            Self::Standard => "standard",
        }
    }

    /// Suffix for temperatures in this unit system
    #[must_use]
    pub const fn temperature_suffix(self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
            Self::Standard => "K",
        }
    }

    /// Suffix for wind speeds in this unit system
    #[must_use]
    pub const fn speed_suffix(self) -> &'static str {
        match self {
            Self::Imperial => "mph",
            Self::Metric | Self::Standard => "m/s",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions for one place
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CurrentWeather {
    /// Place name as resolved by the provider
    #[serde(default)]
    pub name: String,
    /// Condition descriptors, most significant first
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// Temperature, pressure and humidity
    pub main: Readings,
    /// Wind
    #[serde(default)]
    pub wind: Wind,
    /// Cloud cover
    #[serde(default)]
    pub clouds: Clouds,
    /// Rain volume, absent when dry
    #[serde(default)]
    pub rain: Option<Precipitation>,
    /// Snow volume, absent when there is none
    #[serde(default)]
    pub snow: Option<Precipitation>,
    /// Observation time, unix seconds
    #[serde(default)]
    pub dt: i64,
}

impl CurrentWeather {
    /// Description of the dominant condition ("light rain", "clear sky", ...)
    #[must_use]
    pub fn detailed_status(&self) -> &str {
        self.weather
            .first()
            .map_or("unknown", |condition| condition.description.as_str())
    }
}

/// One condition descriptor
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Condition {
    /// Condition group ("Rain", "Clear", ...)
    #[serde(default)]
    pub main: String,
    /// Human-readable description
    #[serde(default)]
    pub description: String,
}

/// Main readings, in the requested unit system
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Readings {
    /// Current temperature
    pub temp: f64,
    /// Perceived temperature
    pub feels_like: f64,
    /// Lowest temperature currently observed in the area
    pub temp_min: f64,
    /// Highest temperature currently observed in the area
    pub temp_max: f64,
    /// Atmospheric pressure, hPa
    #[serde(default)]
    pub pressure: u32,
    /// Relative humidity, %
    #[serde(default)]
    pub humidity: u8,
}

/// Wind readings
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    /// Speed
    #[serde(default)]
    pub speed: f64,
    /// Direction, meteorological degrees
    #[serde(default)]
    pub deg: u16,
}

/// Cloud cover
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Clouds {
    /// Cloudiness, %
    #[serde(default)]
    pub all: u8,
}

/// Precipitation volume over the last one or three hours, mm
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Precipitation {
    /// Last hour
    #[serde(rename = "1h", default, skip_serializing_if = "Option::is_none")]
    pub one_hour: Option<f64>,
    /// Last three hours
    #[serde(rename = "3h", default, skip_serializing_if = "Option::is_none")]
    pub three_hours: Option<f64>,
}

impl Precipitation {
    /// True when neither window carries a volume
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.one_hour.is_none() && self.three_hours.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_provider_payload() {
        let weather: CurrentWeather = serde_json::from_value(json!({
            "coord": {"lon": 2.35, "lat": 48.85},
            "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
            "main": {"temp": 14.2, "feels_like": 13.6, "temp_min": 12.9, "temp_max": 15.1, "pressure": 1012, "humidity": 81},
            "wind": {"speed": 4.1, "deg": 230},
            "clouds": {"all": 90},
            "rain": {"1h": 0.4},
            "dt": 1_700_000_000,
            "name": "Paris",
            "cod": 200
        }))
        .unwrap();

        assert_eq!(weather.name, "Paris");
        assert_eq!(weather.detailed_status(), "light rain");
        assert_eq!(weather.main.humidity, 81);
        assert_eq!(weather.wind.deg, 230);
        assert_eq!(weather.rain.as_ref().and_then(|r| r.one_hour), Some(0.4));
        assert!(weather.snow.is_none());
        assert_eq!(weather.dt, 1_700_000_000);
    }

    #[test]
    fn test_missing_optional_sections_default() {
        let weather: CurrentWeather = serde_json::from_value(json!({
            "main": {"temp": 1.0, "feels_like": -2.0, "temp_min": 0.5, "temp_max": 1.5}
        }))
        .unwrap();

        assert_eq!(weather.detailed_status(), "unknown");
        assert_eq!(weather.wind, Wind::default());
        assert_eq!(weather.dt, 0);
    }

    #[test]
    fn test_units() {
        assert_eq!(Units::default(), Units::Metric);
        assert_eq!(Units::Imperial.to_string(), "imperial");
        assert_eq!(Units::Imperial.temperature_suffix(), "°F");
        assert_eq!(Units::Standard.speed_suffix(), "m/s");

        let units: Units = serde_json::from_str(r#""standard""#).unwrap();
        assert_eq!(units, Units::Standard);
    }
}
