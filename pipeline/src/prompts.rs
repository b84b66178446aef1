//! Fixed instructions sent to the language model

/// Stage 1 instruction; the user query is appended verbatim
pub const EXTRACT_CITY_INSTRUCTION: &str = "Your task is to provide only the city name based on the user query. \
     Nothing more, just the city name mentioned. Following is the user query: ";

/// Stage 3 instruction; query and weather data follow it
pub const COMPOSE_REPORT_INSTRUCTION: &str = "Your task is to provide weather info concisely based on the user query \
     and the available information from the internet. Then, provide the temp in both celsius and fahrenheit";

/// Build the city-extraction prompt for `query`
#[must_use]
pub fn extract_city(query: &str) -> String {
    format!("{EXTRACT_CITY_INSTRUCTION}{query}")
}

/// Build the report prompt from the original query and the weather data
#[must_use]
pub fn compose_report(original_query: &str, weather: &str) -> String {
    format!(
        "{COMPOSE_REPORT_INSTRUCTION} Following is the user query: {original_query} Available information: {weather}"
    )
}
