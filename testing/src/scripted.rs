//! Scripted doubles for the pipeline's two remote services
//!
//! - [`ScriptedLanguageModel`]: replies from a queue, then a fallback responder
//! - [`ScriptedWeatherProvider`]: same, keyed by location
//! - [`CallLog`]: records calls across both doubles in order
//!
//! Doubles are cheap to clone; clones share their script and recordings, so
//! a test can hand one clone to the pipeline and inspect the other.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Panics only on poisoned locks

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use weather_report_llm::LlmError;
use weather_report_pipeline::{LanguageModel, WeatherProvider};
use weather_report_weather::WeatherError;

type LlmResponder = Arc<dyn Fn(&str) -> Result<String, LlmError> + Send + Sync>;
type WeatherResponder = Arc<dyn Fn(&str) -> Result<String, WeatherError> + Send + Sync>;

/// One recorded remote call
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    /// Language-model call with its prompt
    LanguageModel(String),
    /// Weather lookup with its location
    Weather(String),
}

impl Call {
    /// Whether this is a language-model call
    #[must_use]
    pub const fn is_language_model(&self) -> bool {
        matches!(self, Self::LanguageModel(_))
    }
}

/// Ordered record of calls shared between doubles
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded calls
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Whether nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[derive(Default)]
struct LlmScript {
    replies: VecDeque<Result<String, LlmError>>,
    responder: Option<LlmResponder>,
    prompts: Vec<String>,
}

/// Language model that answers from a script
///
/// Queued replies are consumed first. After that the responder, if any,
/// answers; otherwise the call fails with `LlmError::EmptyResponse`.
///
/// # Example
///
/// ```
/// use weather_report_pipeline::LanguageModel;
/// use weather_report_testing::ScriptedLanguageModel;
///
/// let llm = ScriptedLanguageModel::new().with_reply("Paris");
/// let reply = tokio_test::block_on(llm.complete("which city?")).unwrap();
/// assert_eq!(reply, "Paris");
/// assert_eq!(llm.prompts(), ["which city?"]);
/// ```
#[derive(Clone, Default)]
pub struct ScriptedLanguageModel {
    script: Arc<Mutex<LlmScript>>,
    log: Option<CallLog>,
}

impl ScriptedLanguageModel {
    /// Create a model with an empty script
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: queue a successful reply
    #[must_use]
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.script.lock().unwrap().replies.push_back(Ok(reply.into()));
        self
    }

    /// Builder: queue a failure
    #[must_use]
    pub fn with_error(self, error: LlmError) -> Self {
        self.script.lock().unwrap().replies.push_back(Err(error));
        self
    }

    /// Builder: answer unqueued calls by computing a reply from the prompt
    #[must_use]
    pub fn with_responder<F>(self, responder: F) -> Self
    where
        F: Fn(&str) -> Result<String, LlmError> + Send + Sync + 'static,
    {
        self.script.lock().unwrap().responder = Some(Arc::new(responder));
        self
    }

    /// Builder: record calls in a shared log
    #[must_use]
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Prompts received so far, in order
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.script.lock().unwrap().prompts.clone()
    }

    /// Number of calls received
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().prompts.len()
    }

    fn answer(&self, prompt: &str) -> Result<String, LlmError> {
        if let Some(log) = &self.log {
            log.record(Call::LanguageModel(prompt.to_string()));
        }

        let mut script = self.script.lock().unwrap();
        script.prompts.push(prompt.to_string());

        if let Some(reply) = script.replies.pop_front() {
            return reply;
        }
        match &script.responder {
            Some(responder) => responder(prompt),
            None => Err(LlmError::EmptyResponse),
        }
    }
}

impl LanguageModel for ScriptedLanguageModel {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.answer(prompt)
    }
}

#[derive(Default)]
struct WeatherScript {
    replies: VecDeque<Result<String, WeatherError>>,
    responder: Option<WeatherResponder>,
    locations: Vec<String>,
}

/// Weather provider that answers from a script
///
/// Queued reports are consumed first. After that the responder, if any,
/// answers; otherwise the lookup fails with `WeatherError::LocationNotFound`.
#[derive(Clone, Default)]
pub struct ScriptedWeatherProvider {
    script: Arc<Mutex<WeatherScript>>,
    log: Option<CallLog>,
}

impl ScriptedWeatherProvider {
    /// Create a provider with an empty script
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: queue a successful report
    #[must_use]
    pub fn with_report(self, report: impl Into<String>) -> Self {
        self.script.lock().unwrap().replies.push_back(Ok(report.into()));
        self
    }

    /// Builder: queue a failure
    #[must_use]
    pub fn with_error(self, error: WeatherError) -> Self {
        self.script.lock().unwrap().replies.push_back(Err(error));
        self
    }

    /// Builder: answer unqueued lookups by computing a report from the location
    #[must_use]
    pub fn with_responder<F>(self, responder: F) -> Self
    where
        F: Fn(&str) -> Result<String, WeatherError> + Send + Sync + 'static,
    {
        self.script.lock().unwrap().responder = Some(Arc::new(responder));
        self
    }

    /// Builder: record calls in a shared log
    #[must_use]
    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Locations looked up so far, in order
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        self.script.lock().unwrap().locations.clone()
    }

    /// Number of lookups received
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.script.lock().unwrap().locations.len()
    }

    fn answer(&self, location: &str) -> Result<String, WeatherError> {
        if let Some(log) = &self.log {
            log.record(Call::Weather(location.to_string()));
        }

        let mut script = self.script.lock().unwrap();
        script.locations.push(location.to_string());

        if let Some(reply) = script.replies.pop_front() {
            return reply;
        }
        match &script.responder {
            Some(responder) => responder(location),
            None => Err(WeatherError::LocationNotFound(location.to_string())),
        }
    }
}

impl WeatherProvider for ScriptedWeatherProvider {
    async fn lookup(&self, location: &str) -> Result<String, WeatherError> {
        self.answer(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_then_responder() {
        let llm = ScriptedLanguageModel::new()
            .with_reply("first")
            .with_responder(|prompt| Ok(format!("echo: {prompt}")));

        assert_eq!(tokio_test::block_on(llm.complete("a")).unwrap(), "first");
        assert_eq!(tokio_test::block_on(llm.complete("b")).unwrap(), "echo: b");
        assert_eq!(llm.call_count(), 2);
    }

    #[test]
    fn test_exhausted_script_fails() {
        let llm = ScriptedLanguageModel::new();
        let result = tokio_test::block_on(llm.complete("a"));
        assert!(matches!(result, Err(LlmError::EmptyResponse)));

        let weather = ScriptedWeatherProvider::new();
        let result = tokio_test::block_on(weather.lookup("Atlantis"));
        assert!(matches!(result, Err(WeatherError::LocationNotFound(l)) if l == "Atlantis"));
    }

    #[test]
    fn test_clones_share_recordings() {
        let log = CallLog::new();
        let weather = ScriptedWeatherProvider::new()
            .with_report("sunny")
            .with_log(log.clone());
        let handle = weather.clone();

        tokio_test::block_on(weather.lookup("Lyon")).unwrap();

        assert_eq!(handle.locations(), ["Lyon"]);
        assert_eq!(log.calls(), [Call::Weather("Lyon".to_string())]);
    }
}
