// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;
use std::sync::LazyLock;

const DOCUMENT_FIELD: &str = "doc";
const ENTITIES_FIELD: &str = "entities";
const HASHTAGS_FIELD: &str = "hashtags";
const TEXT_FIELD: &str = "text";
const LANGUAGE_FIELD: &str = "lang";

/// Trailing record separator left on each corpus line once the newline is gone
const RECORD_SEPARATOR: char = ',';

static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern is valid"));

/// What a single record contributes to the counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub hashtags: Vec<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The line is not valid JSON
    Decode(String),

    /// A required field is absent from the record
    MissingField(&'static str),

    /// A field is present but has the wrong shape
    UnexpectedType(&'static str),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::Decode(msg) => write!(f, "Failed to decode JSON content: {}", msg),
            ExtractError::MissingField(field) => write!(f, "Missing field '{}'", field),
            ExtractError::UnexpectedType(field) => {
                write!(f, "Field '{}' has an unexpected type", field)
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// How hashtags are pulled out of a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStrategy {
    /// Read the structured `entities.hashtags` list
    #[default]
    Entities,
    /// Scan the free `text` field for `#word` patterns
    Text,
}

impl ExtractionStrategy {
    pub fn extract(self, document: &Value) -> Result<Extraction, ExtractError> {
        let hashtags = match self {
            ExtractionStrategy::Entities => hashtags_from_entities(document)?,
            ExtractionStrategy::Text => hashtags_from_text(document)?,
        };
        let language = language_of(document)?;

        Ok(Extraction { hashtags, language })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionStrategy::Entities => "entities",
            ExtractionStrategy::Text => "text",
        }
    }
}

impl FromStr for ExtractionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entities" => Ok(ExtractionStrategy::Entities),
            "text" => Ok(ExtractionStrategy::Text),
            other => Err(format!(
                "Unknown extraction strategy '{}', expected 'entities' or 'text'",
                other
            )),
        }
    }
}

impl std::fmt::Display for ExtractionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes one corpus line and extracts its hashtags and language
pub fn extract_line(line: &str, strategy: ExtractionStrategy) -> Result<Extraction, ExtractError> {
    let record = strip_separator(line);
    let value: Value =
        serde_json::from_str(record).map_err(|e| ExtractError::Decode(e.to_string()))?;
    let document = value
        .get(DOCUMENT_FIELD)
        .ok_or(ExtractError::MissingField("doc"))?;

    strategy.extract(document)
}

fn strip_separator(line: &str) -> &str {
    let line = line.trim_end_matches(['\r', '\n']);
    line.strip_suffix(RECORD_SEPARATOR).unwrap_or(line)
}

pub fn hashtags_from_entities(document: &Value) -> Result<Vec<String>, ExtractError> {
    let entities = document
        .get(ENTITIES_FIELD)
        .ok_or(ExtractError::MissingField("doc.entities"))?;
    let hashtags = entities
        .get(HASHTAGS_FIELD)
        .ok_or(ExtractError::MissingField("doc.entities.hashtags"))?;

    let items = match hashtags {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        _ => return Err(ExtractError::UnexpectedType("doc.entities.hashtags")),
    };

    items
        .iter()
        .map(|item| {
            item.get(TEXT_FIELD)
                .and_then(Value::as_str)
                .map(str::to_lowercase)
                .ok_or(ExtractError::MissingField("doc.entities.hashtags[].text"))
        })
        .collect()
}

pub fn hashtags_from_text(document: &Value) -> Result<Vec<String>, ExtractError> {
    let text = match document.get(TEXT_FIELD) {
        None => return Err(ExtractError::MissingField("doc.text")),
        Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::String(text)) => text.to_lowercase(),
        Some(_) => return Err(ExtractError::UnexpectedType("doc.text")),
    };

    Ok(HASHTAG_PATTERN
        .captures_iter(&text)
        .map(|captures| captures[1].to_string())
        .collect())
}

fn language_of(document: &Value) -> Result<Option<String>, ExtractError> {
    match document.get(LANGUAGE_FIELD) {
        None => Err(ExtractError::MissingField("doc.lang")),
        Some(Value::Null) => Ok(None),
        Some(Value::String(lang)) if lang.is_empty() => Ok(None),
        Some(Value::String(lang)) => Ok(Some(lang.clone())),
        Some(_) => Err(ExtractError::UnexpectedType("doc.lang")),
    }
}
