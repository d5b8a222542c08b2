use std::sync::{Arc, RwLock};

use super::Judge;
use super::error::{JudgeError, JudgeResult};
use super::types::Assessment;

#[derive(Default)]
struct MockJudgeState {
    assessment: Option<Assessment>,
    score_error: Option<String>,
    discover_urls: Vec<String>,
    discover_error: Option<String>,
    score_calls: usize,
    discover_calls: usize,
}

/// Scripted judge for tests: fixed assessment or error, fixed discovery
/// list or error, with call counters so tests can assert the judge is
/// invoked exactly once per uncached pair.
#[derive(Default, Clone)]
pub struct MockJudge {
    state: Arc<RwLock<MockJudgeState>>,
}

impl MockJudge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Judge that always returns `assessment`.
    pub fn scoring(assessment: Assessment) -> Self {
        let judge = Self::new();
        judge.set_assessment(assessment);
        judge
    }

    pub fn set_assessment(&self, assessment: Assessment) {
        let mut state = self.state.write().expect("lock poisoned");
        state.assessment = Some(assessment);
        state.score_error = None;
    }

    /// Make every `score` call fail with a provider error.
    pub fn fail_scoring(&self, reason: &str) {
        let mut state = self.state.write().expect("lock poisoned");
        state.score_error = Some(reason.to_string());
    }

    pub fn set_discover_urls(&self, urls: &[&str]) {
        let mut state = self.state.write().expect("lock poisoned");
        state.discover_urls = urls.iter().map(|s| s.to_string()).collect();
        state.discover_error = None;
    }

    /// Make every `discover` call fail with a provider error.
    pub fn fail_discovery(&self, reason: &str) {
        let mut state = self.state.write().expect("lock poisoned");
        state.discover_error = Some(reason.to_string());
    }

    pub fn score_calls(&self) -> usize {
        self.state.read().expect("lock poisoned").score_calls
    }

    pub fn discover_calls(&self) -> usize {
        self.state.read().expect("lock poisoned").discover_calls
    }
}

impl Judge for MockJudge {
    async fn score(&self, _hypothesis: &str, _article: &str) -> JudgeResult<Assessment> {
        let mut state = self.state.write().expect("lock poisoned");
        state.score_calls += 1;

        if let Some(reason) = &state.score_error {
            return Err(JudgeError::Provider(reason.clone()));
        }
        state
            .assessment
            .clone()
            .ok_or(JudgeError::EmptyResponse)
    }

    async fn discover(&self, _hypothesis: &str, count: usize) -> JudgeResult<Vec<String>> {
        let mut state = self.state.write().expect("lock poisoned");
        state.discover_calls += 1;

        if let Some(reason) = &state.discover_error {
            return Err(JudgeError::Provider(reason.clone()));
        }
        Ok(state.discover_urls.iter().take(count).cloned().collect())
    }
}
