use moodring::analysis::{BackendProvider, GeminiProvider, ProviderError, SentimentProvider};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_partial_json, body_string_contains, method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

/// Gemini provider pointed at a mock server.
fn gemini_provider(mock_server: &MockServer, require: bool) -> GeminiProvider {
    GeminiProvider::new(
        "test-key".to_string(),
        mock_server.uri(),
        "test-model".to_string(),
        require,
    )
}

/// Mounts the generate endpoint with the given response.
async fn mount_generate(mock_server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1beta2/models/test-model:generate"))
        .and(query_param("key", "test-key"))
        .respond_with(template)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Backend Provider Tests
// ============================================================================

#[tokio::test]
async fn test_backend_status_reports_gemini_configuration() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gemini_enabled": true,
            "mode": "api_key",
            "model": "text-bison@001",
            "require_gemini": true,
        })))
        .mount(&mock_server)
        .await;

    let provider = BackendProvider::new(mock_server.uri());
    let status = provider.status().await.unwrap();

    assert!(status.gemini_enabled);
    assert_eq!(status.mode.as_deref(), Some("api_key"));
    assert_eq!(status.model.as_deref(), Some("text-bison@001"));
    assert!(status.require_gemini);
    assert_eq!(
        status.headline(),
        "Gemini configured (api_key — text-bison@001) — required"
    );
}

#[tokio::test]
async fn test_backend_status_tolerates_sparse_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gemini_enabled": false,
            "mode": null,
            "model": null,
        })))
        .mount(&mock_server)
        .await;

    let provider = BackendProvider::new(mock_server.uri());
    let status = provider.status().await.unwrap();

    assert!(!status.gemini_enabled);
    assert!(status.mode.is_none());
    assert!(!status.require_gemini);
    assert_eq!(status.headline(), "Use Gemini (not configured)");
}

#[tokio::test]
async fn test_backend_status_connection_refused() {
    // Port 1 is never listening
    let provider = BackendProvider::new("http://127.0.0.1:1".to_string());
    let result = provider.status().await;

    assert!(matches!(result, Err(ProviderError::Network(_))));
}

#[tokio::test]
async fn test_backend_analyze_posts_text_and_returns_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sentiment"))
        .and(body_json(json!({"text": "I love this"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sentiment": "positive",
            "score": 0.92,
            "explanation": "Mostly upbeat words.",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = BackendProvider::new(mock_server.uri());
    let payload = provider.analyze("I love this").await.unwrap();

    assert_eq!(payload["sentiment"], "positive");
    assert_eq!(payload["score"].as_f64(), Some(0.92));
    assert_eq!(payload["explanation"], "Mostly upbeat words.");
}

#[tokio::test]
async fn test_backend_analyze_error_body_is_still_a_payload() {
    let mock_server = MockServer::start().await;

    // The service reports trouble in the body; the status line is noise.
    Mock::given(method("POST"))
        .and(path("/api/sentiment"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({
            "error": "Gemini (API key) unavailable: HTTP 500",
        })))
        .mount(&mock_server)
        .await;

    let provider = BackendProvider::new(mock_server.uri());
    let payload = provider.analyze("anything").await.unwrap();

    assert_eq!(payload["error"], "Gemini (API key) unavailable: HTTP 500");
}

#[tokio::test]
async fn test_backend_analyze_non_json_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/sentiment"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let provider = BackendProvider::new(mock_server.uri());
    let result = provider.analyze("anything").await;

    assert!(matches!(result, Err(ProviderError::Parse(_))));
}

// ============================================================================
// Gemini Provider Tests
// ============================================================================

#[tokio::test]
async fn test_gemini_extracts_verdict_from_candidates() {
    let mock_server = MockServer::start().await;

    mount_generate(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "output": "Here you go:\n{\"sentiment\": \"positive\", \"score\": 0.9, \"explanation\": \"upbeat\"}",
            }],
        })),
    )
    .await;

    let provider = gemini_provider(&mock_server, false);
    let payload = provider.analyze("I love this").await.unwrap();

    assert_eq!(payload["sentiment"], "positive");
    assert_eq!(payload["score"].as_f64(), Some(0.9));
    assert_eq!(payload["explanation"], "upbeat");
}

#[tokio::test]
async fn test_gemini_request_carries_prompt_and_decoding_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta2/models/test-model:generate"))
        .and(query_param("key", "test-key"))
        .and(body_string_contains("sentiment analysis assistant"))
        .and(body_partial_json(json!({
            "temperature": 0.0,
            "max_output_tokens": 512,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"output": "{\"sentiment\": \"neutral\", \"score\": 0.5, \"explanation\": \"flat\"}"}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = gemini_provider(&mock_server, false);
    let payload = provider.analyze("meh").await.unwrap();

    // A matcher miss would 404 and fall back to the lexicon instead.
    assert_eq!(payload["sentiment"], "neutral");
    assert_eq!(payload["explanation"], "flat");
}

#[tokio::test]
async fn test_gemini_prose_reply_becomes_unknown_verdict() {
    let mock_server = MockServer::start().await;

    mount_generate(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"output": "It feels fairly upbeat overall."}],
        })),
    )
    .await;

    let provider = gemini_provider(&mock_server, false);
    let payload = provider.analyze("nice day").await.unwrap();

    assert_eq!(payload["sentiment"], "unknown");
    assert_eq!(payload["score"].as_f64(), Some(0.0));
    assert_eq!(payload["explanation"], "It feels fairly upbeat overall.");
}

#[tokio::test]
async fn test_gemini_server_error_falls_back_to_lexicon() {
    let mock_server = MockServer::start().await;

    mount_generate(&mock_server, ResponseTemplate::new(500).set_body_string("internal")).await;

    let provider = gemini_provider(&mock_server, false);
    let payload = provider.analyze("I love this").await.unwrap();

    // Local scoring still produces a verdict; the explanation records why.
    assert_eq!(payload["sentiment"], "positive");
    let explanation = payload["explanation"].as_str().unwrap();
    assert!(explanation.starts_with("Gemini (API key) unavailable:"));
    assert!(explanation.contains("HTTP 500"));
    assert!(explanation.ends_with("(negation-aware)."));
}

#[tokio::test]
async fn test_gemini_server_error_with_require_returns_error_payload() {
    let mock_server = MockServer::start().await;

    mount_generate(&mock_server, ResponseTemplate::new(500).set_body_string("internal")).await;

    let provider = gemini_provider(&mock_server, true);
    let payload = provider.analyze("I love this").await.unwrap();

    let error = payload["error"].as_str().unwrap();
    assert!(error.starts_with("Gemini (API key) unavailable:"));
    assert!(error.contains("HTTP 500"));
    assert!(payload.get("sentiment").is_none());
}
