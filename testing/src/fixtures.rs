//! Canned queries, weather text and wire payloads

use serde_json::{Value, json};

/// Templated query for Paris
pub const PARIS_QUERY: &str = "what is the temperature in Paris";

/// Weather text the weather stage produces for [`paris_current_weather_json`] in metric units
pub const PARIS_WEATHER_REPORT: &str = "In Paris, the current weather is as follows:
Detailed status: light rain
Wind speed: 4.1 m/s, direction: 230°
Humidity: 81%
Temperature:
  - Current: 14.2°C
  - High: 15.1°C
  - Low: 12.9°C
  - Feels like: 13.6°C
Rain: 1h: 0.4 mm
Cloud cover: 90%";

/// A plausible final report for Paris
pub const PARIS_FINAL_REPORT: &str =
    "It is currently 14.2°C (57.6°F) in Paris with light rain and 81% humidity.";

/// OpenWeatherMap current-weather payload for Paris
#[must_use]
pub fn paris_current_weather_json() -> Value {
    json!({
        "coord": {"lon": 2.3488, "lat": 48.8534},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {
            "temp": 14.2,
            "feels_like": 13.6,
            "temp_min": 12.9,
            "temp_max": 15.1,
            "pressure": 1012,
            "humidity": 81
        },
        "wind": {"speed": 4.1, "deg": 230},
        "rain": {"1h": 0.4},
        "clouds": {"all": 90},
        "dt": 1_700_000_000,
        "name": "Paris",
        "cod": 200
    })
}

/// OpenAI chat-completion payload whose single choice says `text`
#[must_use]
pub fn chat_completion_json(text: &str) -> Value {
    json!({
        "id": "chatcmpl-fixture",
        "object": "chat.completion",
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49}
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code
mod tests {
    use super::*;
    use weather_report_llm::ChatResponse;
    use weather_report_weather::{CurrentWeather, Units, format_report};

    #[test]
    fn test_paris_report_matches_payload() {
        let weather: CurrentWeather = serde_json::from_value(paris_current_weather_json()).unwrap();
        assert_eq!(format_report("Paris", &weather, Units::Metric), PARIS_WEATHER_REPORT);
    }

    #[test]
    fn test_chat_completion_payload_parses() {
        let response: ChatResponse = serde_json::from_value(chat_completion_json("Paris")).unwrap();
        assert_eq!(response.text(), Some("Paris"));
    }
}
