/*!
 * Tests for app configuration defaults and validation
 */

use docproof::app_config::{Config, LogLevel};
use docproof::errors::AppError;

fn valid_config() -> Config {
    let mut config = Config::default();
    config.completion.api_key = "test-key".to_string();
    config
}

#[test]
fn test_default_config_shouldMatchDocumentedDefaults() {
    let config = Config::default();

    assert_eq!(config.input_dir.to_str(), Some("article"));
    assert_eq!(config.output_path.to_str(), Some("output/output.docx"));
    assert_eq!(config.chunk_size, 4000);
    assert_eq!(config.completion.model, "gpt-3.5-turbo-instruct");
    assert_eq!(config.completion.temperature, 0.5);
    assert_eq!(config.completion.max_tokens, 2000);
    assert_eq!(config.completion.n, 1);
    assert!(config.completion.stop.is_none());
    assert!(!config.editorial.generate_headings);
    assert_eq!(config.editorial.tag_vocabulary.len(), 7);
    assert_eq!(config.editorial.summary_budget_chars, 10000);
    assert_eq!(config.editorial.summary_excerpt_chars, 5000);
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_validate_withApiKey_shouldPass() {
    assert!(valid_config().validate().is_ok());
}

#[test]
fn test_validate_withoutApiKey_shouldFail() {
    let result = Config::default().validate();
    assert!(matches!(result, Err(AppError::Config(_))));
}

#[test]
fn test_validate_withZeroChunkSize_shouldFail() {
    let mut config = valid_config();
    config.chunk_size = 0;
    assert!(matches!(config.validate(), Err(AppError::Config(_))));
}

#[test]
fn test_validate_withOutOfRangeTemperature_shouldFail() {
    let mut config = valid_config();
    config.completion.temperature = 2.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = valid_config();
    config.completion.endpoint = "not a url".to_string();
    assert!(config.validate().is_err());

    config.completion.endpoint = "ftp://example.com".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withEmptyVocabulary_shouldFail() {
    let mut config = valid_config();
    config.editorial.tag_vocabulary.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withZeroCandidates_shouldFail() {
    let mut config = valid_config();
    config.completion.n = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_deserialize_withPartialJson_shouldFillDefaults() {
    let json = r#"{
        "chunk_size": 3000,
        "completion": { "api_key": "abc", "temperature": 0.2 },
        "editorial": { "generate_headings": true },
        "log_level": "debug"
    }"#;

    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.chunk_size, 3000);
    assert_eq!(config.completion.api_key, "abc");
    assert_eq!(config.completion.temperature, 0.2);
    assert_eq!(config.completion.model, "gpt-3.5-turbo-instruct");
    assert!(config.editorial.generate_headings);
    assert_eq!(config.editorial.summary_budget_chars, 10000);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.input_dir.to_str(), Some("article"));
}

#[test]
fn test_serialize_default_shouldRoundTripThroughJson() {
    let json = serde_json::to_string_pretty(&Config::default()).unwrap();
    let config: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(config.editorial.tag_vocabulary, Config::default().editorial.tag_vocabulary);
}

#[test]
fn test_save_then_from_file_shouldPreserveOverrides() {
    let temp_dir = crate::common::create_temp_dir().unwrap();
    let path = temp_dir.path().join("conf.json");
    let mut config = valid_config();
    config.chunk_size = 1234;
    config.editorial.tag_vocabulary = vec!["idee".to_string()];

    config.save(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();

    assert_eq!(loaded.chunk_size, 1234);
    assert_eq!(loaded.editorial.tag_vocabulary, vec!["idee"]);
    assert_eq!(loaded.completion.api_key, "test-key");
}

#[test]
fn test_from_file_withInvalidJson_shouldFail() {
    let temp_dir = crate::common::create_temp_dir().unwrap();
    let path = crate::common::create_test_file(temp_dir.path(), "conf.json", "{ not json").unwrap();
    assert!(Config::from_file(&path).is_err());
}
