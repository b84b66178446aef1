//! Production wiring against mock HTTP services

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use weather_report_llm::LlmError;
use weather_report_pipeline::{DefaultPipeline, PipelineConfig, PipelineError, Stage};
use weather_report_testing::fixtures::{
    PARIS_FINAL_REPORT, PARIS_WEATHER_REPORT, chat_completion_json, paris_current_weather_json,
};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(llm: &MockServer, weather: &MockServer) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.llm.api_url = llm.uri();
    config.weather.api_url = weather.uri();
    config
}

#[tokio::test]
async fn test_missing_llm_key_fails_before_weather_lookup() {
    let llm = MockServer::start().await;
    let weather = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_json("Toronto")))
        .expect(0)
        .mount(&llm)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_current_weather_json()))
        .expect(0)
        .mount(&weather)
        .await;

    let config = config_for(&llm, &weather).with_credentials(None, Some("owm-key".to_string()));
    let pipeline = DefaultPipeline::from_config(&config).unwrap();

    let err = pipeline.run_for_location("Toronto").await.unwrap_err();

    assert_eq!(err.stage(), Stage::CityExtractor);
    assert!(err.is_missing_credential());
    assert!(matches!(
        err,
        PipelineError::LanguageModel {
            source: LlmError::MissingApiKey,
            ..
        }
    ));
}

#[tokio::test]
async fn test_missing_weather_key_fails_at_weather_fetcher() {
    let llm = MockServer::start().await;
    let weather = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_json("Paris")))
        .expect(1)
        .mount(&llm)
        .await;

    let config = config_for(&llm, &weather).with_credentials(Some("sk-test".to_string()), None);
    let pipeline = DefaultPipeline::from_config(&config).unwrap();

    let err = pipeline.run_for_location("Paris").await.unwrap_err();

    assert_eq!(err.stage(), Stage::WeatherFetcher);
    assert!(err.is_missing_credential());
}

#[tokio::test]
async fn test_full_run_over_http() {
    let llm = MockServer::start().await;
    let weather = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("Nothing more, just the city name mentioned."))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_json("Paris")))
        .expect(1)
        .mount(&llm)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_string_contains("both celsius and fahrenheit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_json(PARIS_FINAL_REPORT)))
        .expect(1)
        .mount(&llm)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_current_weather_json()))
        .expect(1)
        .mount(&weather)
        .await;

    let config = config_for(&llm, &weather)
        .with_credentials(Some("sk-test".to_string()), Some("owm-key".to_string()));
    let pipeline = DefaultPipeline::from_config(&config).unwrap();

    let report = pipeline.run_for_location("Paris").await.unwrap();
    assert_eq!(report, PARIS_FINAL_REPORT);

    // The composer request carries the rendered weather text
    let requests = llm.received_requests().await.unwrap();
    let composer: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    let prompt = composer["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.ends_with(PARIS_WEATHER_REPORT));
}
