// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Generation provider trait and related types
//!
//! Defines the abstraction layer over the external text-generation service.
//! The contract is deliberately narrow: submit one prompt, receive one text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main trait for text-generation providers
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// List available models
    fn available_models(&self) -> Vec<ModelInfo>;

    /// Check if a specific model is supported
    fn supports_model(&self, model: &str) -> bool;

    /// Get model info by ID
    fn get_model_info(&self, model: &str) -> Option<ModelInfo> {
        self.available_models().into_iter().find(|m| m.id == model)
    }

    /// Single-shot text generation: one prompt in, one text out
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;
}

/// Request for a single generation call
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Model to use
    pub model: String,

    /// The fully built prompt text
    pub prompt: String,

    /// Sampling temperature
    pub temperature: f32,

    /// Maximum tokens in the response
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    /// Create a new generation request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: 0.7,
            max_output_tokens: 8192,
        }
    }

    /// Set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set max output tokens
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Response from a generation call
#[derive(Debug, Clone)]
pub struct GenerationResponse {
    /// Response ID
    pub id: String,

    /// Model used
    pub model: String,

    /// Generated text (markdown)
    pub text: String,

    /// Token usage
    pub usage: Usage,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Prompt tokens
    pub input_tokens: u32,
    /// Generated tokens
    pub output_tokens: u32,
}

impl Usage {
    /// Get total tokens used
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

/// Information about a model
#[derive(Debug, Clone)]
pub struct ModelInfo {
    /// Model identifier
    pub id: String,

    /// Human-readable name
    pub display_name: String,

    /// Maximum context window in tokens
    pub context_window: u32,

    /// Maximum output tokens
    pub max_output_tokens: u32,

    /// Input cost per 1K tokens (USD)
    pub input_cost_per_1k: f64,

    /// Output cost per 1K tokens (USD)
    pub output_cost_per_1k: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== GenerationRequest Tests =====

    #[test]
    fn test_generation_request_new() {
        let request = GenerationRequest::new("gemini-1.5-flash", "Solve 2x+5=15");

        assert_eq!(request.model, "gemini-1.5-flash");
        assert_eq!(request.prompt, "Solve 2x+5=15");
        assert_eq!(request.max_output_tokens, 8192);
        assert!((request.temperature - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_generation_request_with_temperature() {
        let request = GenerationRequest::new("gemini-1.5-flash", "Hi").with_temperature(0.2);
        assert!((request.temperature - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_generation_request_with_max_output_tokens() {
        let request = GenerationRequest::new("gemini-1.5-flash", "Hi").with_max_output_tokens(1024);
        assert_eq!(request.max_output_tokens, 1024);
    }

    #[test]
    fn test_generation_request_chained() {
        let request = GenerationRequest::new("gemini-1.5-pro", "Hi")
            .with_temperature(0.9)
            .with_max_output_tokens(2048);

        assert_eq!(request.model, "gemini-1.5-pro");
        assert!((request.temperature - 0.9).abs() < 0.001);
        assert_eq!(request.max_output_tokens, 2048);
    }

    // ===== Usage Tests =====

    #[test]
    fn test_usage_total_tokens() {
        let usage = Usage {
            input_tokens: 100,
            output_tokens: 50,
        };

        assert_eq!(usage.total_tokens(), 150);
    }

    #[test]
    fn test_usage_default() {
        let usage = Usage::default();
        assert_eq!(usage.input_tokens, 0);
        assert_eq!(usage.output_tokens, 0);
        assert_eq!(usage.total_tokens(), 0);
    }

    // ===== ModelInfo Tests =====

    #[test]
    fn test_model_info_creation() {
        let info = ModelInfo {
            id: "gemini-1.5-flash".to_string(),
            display_name: "Gemini 1.5 Flash".to_string(),
            context_window: 1_000_000,
            max_output_tokens: 8192,
            input_cost_per_1k: 0.000075,
            output_cost_per_1k: 0.0003,
        };

        assert_eq!(info.id, "gemini-1.5-flash");
        assert_eq!(info.context_window, 1_000_000);
    }

    #[test]
    fn test_model_info_clone() {
        let info = ModelInfo {
            id: "test".to_string(),
            display_name: "Test Model".to_string(),
            context_window: 1000,
            max_output_tokens: 100,
            input_cost_per_1k: 0.001,
            output_cost_per_1k: 0.002,
        };

        let cloned = info.clone();
        assert_eq!(cloned.id, info.id);
        assert_eq!(cloned.context_window, info.context_window);
    }

    // ===== GenerationResponse Tests =====

    #[test]
    fn test_generation_response_creation() {
        let response = GenerationResponse {
            id: "resp_123".to_string(),
            model: "gemini-1.5-flash".to_string(),
            text: "# Solution\n\nx = 5".to_string(),
            usage: Usage::default(),
        };

        assert_eq!(response.id, "resp_123");
        assert!(response.text.contains("x = 5"));
    }
}
