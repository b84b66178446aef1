//! Stage identities and labeled stage output

use serde::Serialize;
use std::fmt;

/// One step of the fixed three-step pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Stage 1: language model pulls the city name out of the query
    CityExtractor,
    /// Stage 2: weather provider looks the city up
    WeatherFetcher,
    /// Stage 3: language model turns query and weather data into the report
    ReportComposer,
}

impl Stage {
    /// Stages in execution order
    pub const ALL: [Self; 3] = [Self::CityExtractor, Self::WeatherFetcher, Self::ReportComposer];

    /// Label used in logs and streamed output
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CityExtractor => "city_extractor",
            Self::WeatherFetcher => "weather_fetcher",
            Self::ReportComposer => "report_composer",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of one completed stage, labeled with the stage that produced it
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageOutput {
    /// Producing stage
    pub stage: Stage,
    /// Text the stage produced
    pub output: String,
}

impl StageOutput {
    /// Label `output` with `stage`
    #[must_use]
    pub fn new(stage: Stage, output: impl Into<String>) -> Self {
        Self {
            stage,
            output: output.into(),
        }
    }
}
