// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shpora::error::ShporaError;
use shpora::llm::providers::GeminiProvider;
use shpora::llm::{GenerationProvider, GenerationRequest};

fn success_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 21, "candidatesTokenCount": 42}
    })
}

#[tokio::test]
async fn test_generate_success() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("# Ответ\n\nx = 5")))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let response = provider
        .generate(GenerationRequest::new("gemini-1.5-flash", "Реши 2x+5=15"))
        .await
        .unwrap();

    assert_eq!(response.text, "# Ответ\n\nx = 5");
    assert_eq!(response.model, "gemini-1.5-flash");
    assert_eq!(response.usage.input_tokens, 21);
    assert_eq!(response.usage.output_tokens, 42);
}

#[tokio::test]
async fn test_generate_sends_prompt_and_config() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "the prompt"}]}],
            "generationConfig": {"maxOutputTokens": 512}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let request = GenerationRequest::new("gemini-1.5-flash", "the prompt")
        .with_max_output_tokens(512);

    provider.generate(request).await.unwrap();
}

#[tokio::test]
async fn test_generate_server_error_surfaces_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": {"code": 500, "message": "backend overloaded", "status": "INTERNAL"}
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let err = provider
        .generate(GenerationRequest::new("gemini-1.5-flash", "hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("backend overloaded"));
}

#[tokio::test]
async fn test_generate_auth_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED"}
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("bad-key", mock_server.uri());
    let err = provider
        .generate(GenerationRequest::new("gemini-1.5-flash", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, ShporaError::Api(_)));
    assert!(err.to_string().contains("Authentication failed"));
}

#[tokio::test]
async fn test_generate_model_not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-9:generateContent"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": {"code": 404, "message": "models/gemini-9 is not found", "status": "NOT_FOUND"}
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let err = provider
        .generate(GenerationRequest::new("gemini-9", "hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Model not found"));
}

#[tokio::test]
async fn test_generate_empty_candidates_is_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
        )
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let err = provider
        .generate(GenerationRequest::new("gemini-1.5-flash", "hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("no usable response"));
}

#[tokio::test]
async fn test_generate_blocked_prompt_is_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let err = provider
        .generate(GenerationRequest::new("gemini-1.5-flash", "hi"))
        .await
        .unwrap_err();

    assert!(err.to_string().contains("blocked"));
}

#[tokio::test]
async fn test_generate_multi_part_response_joined() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"parts": [{"text": "part one "}, {"text": "part two"}]}
            }]
        })))
        .mount(&mock_server)
        .await;

    let provider = GeminiProvider::with_base_url("test-key", mock_server.uri());
    let response = provider
        .generate(GenerationRequest::new("gemini-1.5-flash", "hi"))
        .await
        .unwrap();

    assert_eq!(response.text, "part one part two");
    // No usage metadata in the body
    assert_eq!(response.usage.total_tokens(), 0);
}
