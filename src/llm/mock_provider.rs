// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock generation provider for testing
//!
//! Provides a configurable mock implementation of the GenerationProvider
//! trait that can be used in unit tests without making real API calls.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{ApiError, Result, ShporaError};
use crate::llm::provider::{
    GenerationProvider, GenerationRequest, GenerationResponse, ModelInfo, Usage,
};

/// A mock generation provider for testing
#[derive(Clone)]
pub struct MockProvider {
    /// Provider name
    name: String,
    /// Configured outcomes, returned in order
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    /// Call counter
    call_count: Arc<AtomicUsize>,
    /// Recorded requests
    recorded_requests: Arc<Mutex<Vec<GenerationRequest>>>,
    /// Available models
    models: Vec<ModelInfo>,
}

/// A pre-configured outcome for the mock provider
#[derive(Clone, Debug)]
pub enum MockOutcome {
    /// Return this text
    Text(String),
    /// Fail with this message (surfaced as an InvalidResponse error)
    Failure(String),
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            outcomes: Arc::new(Mutex::new(vec![MockOutcome::Text(
                "Mock response".to_string(),
            )])),
            call_count: Arc::new(AtomicUsize::new(0)),
            recorded_requests: Arc::new(Mutex::new(vec![])),
            models: vec![Self::default_model()],
        }
    }

    /// Create a mock provider with a custom name
    pub fn with_name(name: impl Into<String>) -> Self {
        let mut provider = Self::new();
        provider.name = name.into();
        provider
    }

    /// Create a default model info
    fn default_model() -> ModelInfo {
        ModelInfo {
            id: "mock-model".to_string(),
            display_name: "Mock Model".to_string(),
            context_window: 128_000,
            max_output_tokens: 8192,
            input_cost_per_1k: 0.0,
            output_cost_per_1k: 0.0,
        }
    }

    /// Set a single text response
    pub fn with_response(self, text: impl Into<String>) -> Self {
        {
            let mut outcomes = self.outcomes.lock().unwrap();
            outcomes.clear();
            outcomes.push(MockOutcome::Text(text.into()));
        }
        self
    }

    /// Queue multiple responses (returned in order, last one repeats)
    pub fn with_responses(self, texts: Vec<String>) -> Self {
        {
            let mut outcomes = self.outcomes.lock().unwrap();
            outcomes.clear();
            for text in texts {
                outcomes.push(MockOutcome::Text(text));
            }
        }
        self
    }

    /// Set a failure outcome
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        {
            let mut outcomes = self.outcomes.lock().unwrap();
            outcomes.clear();
            outcomes.push(MockOutcome::Failure(message.into()));
        }
        self
    }

    /// Queue arbitrary outcomes (returned in order, last one repeats)
    pub fn with_outcomes(self, queued: Vec<MockOutcome>) -> Self {
        {
            let mut outcomes = self.outcomes.lock().unwrap();
            *outcomes = queued;
        }
        self
    }

    /// Add custom models
    pub fn with_models(mut self, models: Vec<ModelInfo>) -> Self {
        self.models = models;
        self
    }

    /// Get the number of times generate() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get all recorded requests
    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.recorded_requests.lock().unwrap().clone()
    }

    /// Get the last request made
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.recorded_requests.lock().unwrap().last().cloned()
    }

    /// Reset call count and recorded requests
    pub fn reset(&self) {
        self.call_count.store(0, Ordering::SeqCst);
        self.recorded_requests.lock().unwrap().clear();
    }

    /// Get the next outcome
    fn next_outcome(&self) -> MockOutcome {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);
        let outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            MockOutcome::Text("Mock response".to_string())
        } else {
            outcomes[count.min(outcomes.len() - 1)].clone()
        }
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn available_models(&self) -> Vec<ModelInfo> {
        self.models.clone()
    }

    fn supports_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m.id == model)
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        self.recorded_requests.lock().unwrap().push(request.clone());

        match self.next_outcome() {
            MockOutcome::Text(text) => Ok(GenerationResponse {
                id: format!("mock-{}", self.call_count()),
                model: request.model,
                text,
                usage: Usage {
                    input_tokens: (request.prompt.len() / 4) as u32,
                    output_tokens: 10,
                },
            }),
            MockOutcome::Failure(message) => {
                Err(ShporaError::Api(ApiError::InvalidResponse(message)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default_response() {
        let provider = MockProvider::new();
        let response = provider
            .generate(GenerationRequest::new("mock-model", "Hi"))
            .await
            .unwrap();

        assert_eq!(response.text, "Mock response");
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_with_response() {
        let provider = MockProvider::new().with_response("custom text");
        let response = provider
            .generate(GenerationRequest::new("mock-model", "Hi"))
            .await
            .unwrap();

        assert_eq!(response.text, "custom text");
    }

    #[tokio::test]
    async fn test_mock_provider_queued_responses() {
        let provider = MockProvider::new()
            .with_responses(vec!["first".to_string(), "second".to_string()]);

        let r1 = provider
            .generate(GenerationRequest::new("mock-model", "a"))
            .await
            .unwrap();
        let r2 = provider
            .generate(GenerationRequest::new("mock-model", "b"))
            .await
            .unwrap();
        let r3 = provider
            .generate(GenerationRequest::new("mock-model", "c"))
            .await
            .unwrap();

        assert_eq!(r1.text, "first");
        assert_eq!(r2.text, "second");
        // Last response repeats
        assert_eq!(r3.text, "second");
    }

    #[tokio::test]
    async fn test_mock_provider_failure() {
        let provider = MockProvider::new().with_failure("service unavailable");
        let err = provider
            .generate(GenerationRequest::new("mock-model", "Hi"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("service unavailable"));
    }

    #[tokio::test]
    async fn test_mock_provider_records_requests() {
        let provider = MockProvider::new();
        provider
            .generate(GenerationRequest::new("mock-model", "the prompt"))
            .await
            .unwrap();

        let last = provider.last_request().unwrap();
        assert_eq!(last.prompt, "the prompt");
        assert_eq!(provider.recorded_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_reset() {
        let provider = MockProvider::new();
        provider
            .generate(GenerationRequest::new("mock-model", "Hi"))
            .await
            .unwrap();

        provider.reset();
        assert_eq!(provider.call_count(), 0);
        assert!(provider.recorded_requests().is_empty());
    }

    #[test]
    fn test_mock_provider_name_and_models() {
        let provider = MockProvider::with_name("fake");
        assert_eq!(provider.name(), "fake");
        assert!(provider.supports_model("mock-model"));
        assert!(!provider.supports_model("real-model"));
    }
}
