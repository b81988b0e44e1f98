/*!
 * Tests for the OpenAI completions wire format
 */

use docproof::errors::ProviderError;
use docproof::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};
use docproof::providers::{CompletionParameters, CompletionRequest, CompletionResponse};
use reqwest::StatusCode;

#[test]
fn test_request_serialization_withoutStop_shouldOmitField() {
    let request = CompletionRequest::new("Popraw.", CompletionParameters::new("gpt-3.5-turbo-instruct"));
    let json = serde_json::to_value(OpenAIRequest::from(request)).unwrap();

    assert_eq!(json["model"], "gpt-3.5-turbo-instruct");
    assert_eq!(json["prompt"], "Popraw.");
    assert_eq!(json["max_tokens"], 2000);
    assert_eq!(json["n"], 1);
    assert!(json.get("stop").is_none());
}

#[test]
fn test_request_serialization_withStop_shouldIncludeField() {
    let mut parameters = CompletionParameters::new("m").temperature(0.0).max_tokens(10);
    parameters.stop = Some(vec!["\n\n".to_string()]);
    let json = serde_json::to_value(OpenAIRequest::from(CompletionRequest::new("p", parameters))).unwrap();

    assert_eq!(json["stop"][0], "\n\n");
    assert_eq!(json["max_tokens"], 10);
}

#[test]
fn test_response_conversion_shouldOrderChoicesByIndex() {
    let body = r#"{
        "id": "cmpl-1",
        "object": "text_completion",
        "choices": [
            { "text": "second", "index": 1, "finish_reason": "stop" },
            { "text": "first", "index": 0, "finish_reason": "length" }
        ],
        "usage": { "prompt_tokens": 12, "completion_tokens": 4, "total_tokens": 16 }
    }"#;
    let response: OpenAIResponse = serde_json::from_str(body).unwrap();
    let response: CompletionResponse = response.into();

    assert_eq!(response.choices, vec!["first", "second"]);
    assert_eq!(response.first_text().unwrap(), "first");
    assert_eq!(response.usage.unwrap().completion_tokens, 4);
}

#[test]
fn test_response_withoutChoices_shouldFailFirstText() {
    let response: OpenAIResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
    let response: CompletionResponse = response.into();
    assert!(matches!(response.first_text(), Err(ProviderError::ParseError(_))));
}

#[test]
fn test_error_for_status_shouldMapAuthAndRateLimit() {
    assert!(matches!(
        OpenAI::error_for_status(StatusCode::UNAUTHORIZED, "bad key".to_string()),
        ProviderError::AuthenticationError(_)
    ));
    assert!(matches!(
        OpenAI::error_for_status(StatusCode::TOO_MANY_REQUESTS, "slow".to_string()),
        ProviderError::RateLimitExceeded(_)
    ));
    assert!(matches!(
        OpenAI::error_for_status(StatusCode::BAD_GATEWAY, "down".to_string()),
        ProviderError::ApiError { status_code: 502, .. }
    ));
}

#[test]
fn test_completions_url_shouldTrimTrailingSlash() {
    assert_eq!(
        OpenAI::new("k", "https://api.openai.com/v1/").completions_url(),
        "https://api.openai.com/v1/completions"
    );
    assert_eq!(
        OpenAI::new("k", "http://localhost:8080/v1").completions_url(),
        "http://localhost:8080/v1/completions"
    );
}
