// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tweet_analytics_core::{
    extract_line, ExtractError, ExtractionStrategy, FrequencyMap, LocalAggregator,
};

fn record(text: &str, hashtags: &[&str], lang: &str) -> String {
    let tags: Vec<String> = hashtags
        .iter()
        .map(|t| format!(r#"{{"text":"{}"}}"#, t))
        .collect();
    format!(
        r#"{{"id":"1","doc":{{"text":"{}","entities":{{"hashtags":[{}]}},"lang":"{}"}}}},"#,
        text,
        tags.join(","),
        lang
    )
}

// ============================================================
// Structured (entities) strategy
// ============================================================

#[test]
fn test_entities_lowercases_tags_and_keeps_language() {
    let line = record("Hello #Rust", &["Rust", "TOKIO"], "en");
    let extraction = extract_line(&line, ExtractionStrategy::Entities).unwrap();

    assert_eq!(extraction.hashtags, vec!["rust", "tokio"]);
    assert_eq!(extraction.language.as_deref(), Some("en"));
}

#[test]
fn test_trailing_separator_is_optional() {
    let line = record("", &["go"], "fr");
    let without = line.trim_end_matches(',');

    let a = extract_line(&line, ExtractionStrategy::Entities).unwrap();
    let b = extract_line(without, ExtractionStrategy::Entities).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_language_contributes_nothing() {
    let line = record("", &["go"], "");
    let extraction = extract_line(&line, ExtractionStrategy::Entities).unwrap();

    assert_eq!(extraction.hashtags, vec!["go"]);
    assert_eq!(extraction.language, None);
}

#[test]
fn test_null_hashtags_and_language_are_not_errors() {
    let line = r#"{"doc":{"text":"x","entities":{"hashtags":null},"lang":null}},"#;
    let extraction = extract_line(line, ExtractionStrategy::Entities).unwrap();

    assert!(extraction.hashtags.is_empty());
    assert_eq!(extraction.language, None);
}

#[test]
fn test_case_variants_increment_the_same_key() {
    let mut aggregator = LocalAggregator::new();
    for line in [record("", &["Foo"], "en"), record("", &["foo"], "en")] {
        let extraction = extract_line(&line, ExtractionStrategy::Entities).unwrap();
        aggregator.observe_extraction(&extraction);
    }
    let partial = aggregator.finish();

    assert_eq!(partial.hashtags.get("foo"), 2);
    assert_eq!(partial.hashtags.len(), 1);
    assert_eq!(partial.languages.get("en"), 2);
}

// ============================================================
// Pattern (text) strategy
// ============================================================

#[test]
fn test_text_scans_hash_words() {
    let line = record("Loving #RustLang and #tokio_rs today! #", &[], "en");
    let extraction = extract_line(&line, ExtractionStrategy::Text).unwrap();

    assert_eq!(extraction.hashtags, vec!["rustlang", "tokio_rs"]);
}

#[test]
fn test_strategies_agree_when_both_representations_exist() {
    let line = record("so much #Foo here", &["Foo"], "en");

    let entities = extract_line(&line, ExtractionStrategy::Entities).unwrap();
    let text = extract_line(&line, ExtractionStrategy::Text).unwrap();

    let from_entities: FrequencyMap = entities.hashtags.iter().map(String::as_str).collect();
    let from_text: FrequencyMap = text.hashtags.iter().map(String::as_str).collect();

    assert_eq!(from_entities, from_text);
    assert_eq!(from_entities.get("foo"), 1);
    assert_eq!(from_entities.len(), 1);
    assert_eq!(entities.language, text.language);
}

#[test]
fn test_text_strategy_requires_text_field() {
    let line = r#"{"doc":{"entities":{"hashtags":[]},"lang":"en"}}"#;
    assert_eq!(
        extract_line(line, ExtractionStrategy::Text),
        Err(ExtractError::MissingField("doc.text"))
    );
}

// ============================================================
// Malformed records
// ============================================================

#[test]
fn test_invalid_json_is_a_decode_error() {
    let result = extract_line("{\"doc\": {", ExtractionStrategy::Entities);
    assert!(matches!(result, Err(ExtractError::Decode(_))));
}

#[test]
fn test_missing_document_is_reported() {
    assert_eq!(
        extract_line(r#"{"id":"1"},"#, ExtractionStrategy::Entities),
        Err(ExtractError::MissingField("doc"))
    );
}

#[test]
fn test_missing_nested_fields_are_reported() {
    assert_eq!(
        extract_line(r#"{"doc":{"lang":"en"}}"#, ExtractionStrategy::Entities),
        Err(ExtractError::MissingField("doc.entities"))
    );
    assert_eq!(
        extract_line(
            r#"{"doc":{"entities":{"hashtags":[]}}}"#,
            ExtractionStrategy::Entities
        ),
        Err(ExtractError::MissingField("doc.lang"))
    );
}

#[test]
fn test_tag_without_text_rejects_whole_line() {
    let line = r#"{"doc":{"entities":{"hashtags":[{"text":"ok"},{"indices":[1,2]}]},"lang":"en"}}"#;
    assert_eq!(
        extract_line(line, ExtractionStrategy::Entities),
        Err(ExtractError::MissingField("doc.entities.hashtags[].text"))
    );
}

#[test]
fn test_hashtags_of_wrong_type_is_reported() {
    let line = r#"{"doc":{"entities":{"hashtags":"rust"},"lang":"en"}}"#;
    assert_eq!(
        extract_line(line, ExtractionStrategy::Entities),
        Err(ExtractError::UnexpectedType("doc.entities.hashtags"))
    );
}

#[test]
fn test_strategy_parses_from_str() {
    assert_eq!("entities".parse(), Ok(ExtractionStrategy::Entities));
    assert_eq!("text".parse(), Ok(ExtractionStrategy::Text));
    assert!("regex".parse::<ExtractionStrategy>().is_err());
    assert_eq!(ExtractionStrategy::default(), ExtractionStrategy::Entities);
}
