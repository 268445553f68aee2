// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashMap;
use std::io::Write;
use tempfile::NamedTempFile;
use tweet_analytics_core::{
    format_count, AnalysisReport, ConfigError, FrequencyMap, LanguageConfig, MergedResult,
    PartialResult, RankingEntry,
};

#[test]
fn test_format_count_groups_thousands() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(1_000), "1,000");
    assert_eq!(format_count(12_345), "12,345");
    assert_eq!(format_count(1_234_567), "1,234,567");
}

#[test]
fn test_report_ranks_both_dimensions() {
    let mut hashtags = FrequencyMap::new();
    hashtags.add("rust", 1_500);
    hashtags.add("go", 2);
    let mut languages = FrequencyMap::new();
    languages.add("xx", 3);
    languages.add("en", 7);

    let report =
        AnalysisReport::from_merged(&MergedResult::seeded(PartialResult::new(hashtags, languages)));

    assert_eq!(
        report.top_hashtags,
        vec![RankingEntry::new("rust", 1_500), RankingEntry::new("go", 2)]
    );
    assert_eq!(
        report.top_languages,
        vec![RankingEntry::new("en", 7), RankingEntry::new("xx", 3)]
    );

    let names = LanguageConfig::new(HashMap::from([("en".to_string(), "English".to_string())]));
    let rendered = report.render(&names);

    assert!(rendered.contains("Top 10 most commonly used hashtags:\n1. #rust, 1,500\n2. #go, 2\n"));
    assert!(rendered.contains(
        "Top 10 most commonly used languages:\n1. English (en), 7\n2. Undefined (xx), 3\n"
    ));
}

#[test]
fn test_language_config_loads_languages_object() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"languages": {{"en": "English", "fr": "French"}}, "other": 1}}"#
    )
    .unwrap();

    let config = LanguageConfig::load(file.path()).unwrap();
    assert_eq!(config.len(), 2);
    assert!(!config.is_empty());
    assert_eq!(config.name_of("fr"), Some("French"));
    assert_eq!(config.name_of("de"), None);
}

#[test]
fn test_language_config_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("languages.json");
    assert_eq!(
        LanguageConfig::load(&missing),
        Err(ConfigError::NotFound(missing.clone()))
    );

    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"langs": {{}}}}"#).unwrap();
    assert!(matches!(
        LanguageConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}
