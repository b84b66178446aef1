//! Shared state threaded through the pipeline stages

/// Prefix of the templated query the interactive surface seeds runs with
pub const QUERY_TEMPLATE: &str = "what is the temperature in ";

/// Fixed query used by the diagnostic smoke run
pub const SMOKE_TEST_QUERY: &str = "what is the temperature in Toronto";

/// Append-only record of text produced during one pipeline invocation.
///
/// Stages see only two entries: the original query (entry 0) and the most
/// recent output (the last entry). Intermediate entries are counted but not
/// kept, so nothing can read or rewrite them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineState {
    original_query: String,
    last_output: String,
    entry_count: usize,
}

impl PipelineState {
    /// Seed a state with the user's raw query as its only entry
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let query = query.into();
        Self {
            last_output: query.clone(),
            original_query: query,
            entry_count: 1,
        }
    }

    /// Seed a state from a free-form location using the fixed query template
    #[must_use]
    pub fn for_location(location: &str) -> Self {
        Self::new(format!("{QUERY_TEMPLATE}{location}"))
    }

    /// Entry 0: the query the run was seeded with
    #[must_use]
    pub fn original_query(&self) -> &str {
        &self.original_query
    }

    /// The last entry: the most recent stage output, or the query before any stage ran
    #[must_use]
    pub fn last_output(&self) -> &str {
        &self.last_output
    }

    /// Number of entries, including the seed
    #[must_use]
    pub const fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Append an entry, making it the new last output
    pub fn append(&mut self, entry: impl Into<String>) {
        self.last_output = entry.into();
        self.entry_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_single_entry() {
        let state = PipelineState::new("what is the temperature in Paris");
        assert_eq!(state.entry_count(), 1);
        assert_eq!(state.original_query(), "what is the temperature in Paris");
        assert_eq!(state.last_output(), state.original_query());
    }

    #[test]
    fn test_for_location_uses_template() {
        let state = PipelineState::for_location("Toronto");
        assert_eq!(state.original_query(), "what is the temperature in Toronto");
        assert_eq!(state.original_query(), SMOKE_TEST_QUERY);
    }

    #[test]
    fn test_append_keeps_original_query() {
        let mut state = PipelineState::new("what is the temperature in Paris");
        state.append("Paris");
        state.append("In Paris, the current weather is as follows: ...");

        assert_eq!(state.entry_count(), 3);
        assert_eq!(state.original_query(), "what is the temperature in Paris");
        assert!(state.last_output().starts_with("In Paris"));
    }
}
