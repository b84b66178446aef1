//! # Weather-data client
//!
//! Client for the OpenWeatherMap current-weather API. The pipeline's weather
//! stage calls [`OpenWeatherMapClient::report`], which looks a place up by
//! name and renders the conditions as a plain-text block.
//!
//! ## Example
//!
//! ```no_run
//! use weather_report_weather::{OpenWeatherMapClient, Units};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenWeatherMapClient::from_env().with_units(Units::Metric);
//!     println!("{}", client.report("Toronto").await?);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod report;

pub use client::{OpenWeatherMapClient, API_KEY_ENV, DEFAULT_API_URL};
pub use error::WeatherError;
pub use model::{Clouds, Condition, CurrentWeather, Precipitation, Readings, Units, Wind};
pub use report::format_report;
