use std::sync::Mutex;

use async_trait::async_trait;
use restyle_core::RestyleError;

use super::{GenerateRequest, TextModel};

/// A mock backend for testing that returns a preconfigured result and
/// records every request it receives.
pub struct MockModel {
    outcome: Result<String, String>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl MockModel {
    /// Create a mock that returns the given text.
    pub fn success(text: &str) -> Self {
        Self {
            outcome: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that fails as if the upstream call errored.
    pub fn failure(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[async_trait]
impl TextModel for MockModel {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, RestyleError> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());
        self.outcome.clone().map_err(RestyleError::Upstream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restyle_core::{GenerationSettings, Style};

    fn request(prompt: &str) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.to_string(),
            settings: GenerationSettings::for_style(Style::Casual),
        }
    }

    #[test]
    fn name_is_mock() {
        assert_eq!(MockModel::success("").name(), "mock");
    }

    #[test]
    fn model_hint_default_is_none() {
        assert_eq!(MockModel::success("").model_hint(), None);
    }

    #[tokio::test]
    async fn success_returns_text() {
        let mock = MockModel::success("rewritten");
        let out = mock.generate(&request("p")).await.unwrap();
        assert_eq!(out, "rewritten");
    }

    #[tokio::test]
    async fn failure_returns_upstream_error() {
        let mock = MockModel::failure("quota exceeded");
        let err = mock.generate(&request("p")).await.unwrap_err();
        assert!(matches!(err, RestyleError::Upstream(ref m) if m == "quota exceeded"));
    }

    #[tokio::test]
    async fn records_requests_in_order() {
        let mock = MockModel::success("ok");
        mock.generate(&request("first")).await.unwrap();
        mock.generate(&request("second")).await.unwrap();
        let seen = mock.requests();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].prompt, "first");
        assert_eq!(seen[1].prompt, "second");
    }
}
