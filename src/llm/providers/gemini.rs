// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Google Gemini API provider implementation
//!
//! Implements the GenerationProvider trait over the Generative Language
//! API's generateContent endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result, ShporaError};
use crate::llm::provider::{
    GenerationProvider, GenerationRequest, GenerationResponse, ModelInfo, Usage,
};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini provider
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_URL.to_string(),
        }
    }

    /// Create with a custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Build the request body
    fn build_request(&self, request: &GenerationRequest) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: Some(request.prompt.clone()),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        }
    }

    /// Parse an error response
    fn parse_error(&self, status: u16, body: &str) -> ShporaError {
        if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(body) {
            let error = error_response.error;
            match (status, error.status.as_str()) {
                (401, _) | (403, _) | (_, "UNAUTHENTICATED") | (_, "PERMISSION_DENIED") => {
                    ShporaError::Api(ApiError::AuthenticationFailed)
                }
                (429, _) | (_, "RESOURCE_EXHAUSTED") => {
                    ShporaError::Api(ApiError::RateLimited(10))
                }
                (404, _) | (_, "NOT_FOUND") => {
                    ShporaError::Api(ApiError::ModelNotFound(error.message))
                }
                _ => ShporaError::Api(ApiError::ServerError {
                    status,
                    message: error.message,
                }),
            }
        } else {
            ShporaError::Api(ApiError::ServerError {
                status,
                message: body.to_string(),
            })
        }
    }

    /// Extract the generated text from a response body.
    ///
    /// A success status with no candidates, no text parts, or a safety
    /// block is still a generation failure for the caller.
    fn extract_text(api_response: &GeminiResponse) -> Result<String> {
        if let Some(ref feedback) = api_response.prompt_feedback {
            if let Some(ref reason) = feedback.block_reason {
                return Err(ShporaError::Api(ApiError::InvalidResponse(format!(
                    "prompt was blocked: {}",
                    reason
                ))));
            }
        }

        let text: String = api_response
            .candidates
            .iter()
            .flatten()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("");

        if text.is_empty() {
            return Err(ShporaError::Api(ApiError::InvalidResponse(
                "no usable response from the model".to_string(),
            )));
        }

        Ok(text)
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn available_models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "gemini-1.5-flash".to_string(),
                display_name: "Gemini 1.5 Flash".to_string(),
                context_window: 1_000_000,
                max_output_tokens: 8_192,
                input_cost_per_1k: 0.000075,
                output_cost_per_1k: 0.0003,
            },
            ModelInfo {
                id: "gemini-1.5-pro".to_string(),
                display_name: "Gemini 1.5 Pro".to_string(),
                context_window: 2_000_000,
                max_output_tokens: 8_192,
                input_cost_per_1k: 0.00125,
                output_cost_per_1k: 0.005,
            },
            ModelInfo {
                id: "gemini-2.0-flash".to_string(),
                display_name: "Gemini 2.0 Flash".to_string(),
                context_window: 1_000_000,
                max_output_tokens: 8_192,
                input_cost_per_1k: 0.0001,
                output_cost_per_1k: 0.0004,
            },
        ]
    }

    fn supports_model(&self, model: &str) -> bool {
        self.available_models().iter().any(|m| m.id == model)
    }

    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, request.model
        );
        let body = self.build_request(&request);

        tracing::debug!(model = %request.model, "dispatching generation request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ShporaError::Api(ApiError::Network(e.to_string()))
                } else {
                    ShporaError::Http(e)
                }
            })?;

        let status = response.status().as_u16();

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.parse_error(status, &body));
        }

        let api_response: GeminiResponse = response.json().await?;
        let text = Self::extract_text(&api_response)?;

        let usage = api_response
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count.unwrap_or(0),
                output_tokens: u.candidates_token_count.unwrap_or(0),
            })
            .unwrap_or_default();

        Ok(GenerationResponse {
            id: format!("gemini-{}", uuid::Uuid::new_v4()),
            model: request.model,
            text,
            usage,
        })
    }
}

// Gemini API types

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Option<Vec<GeminiCandidate>>,
    #[serde(default)]
    prompt_feedback: Option<GeminiPromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    #[serde(default)]
    content: Option<GeminiContent>,
    #[serde(default)]
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    #[serde(default)]
    #[allow(dead_code)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}
