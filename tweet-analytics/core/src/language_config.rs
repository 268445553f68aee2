// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct LanguageConfigFile {
    languages: HashMap<String, String>,
}

/// Language code to display name table, used only when rendering the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageConfig {
    languages: HashMap<String, String>,
}

impl LanguageConfig {
    pub fn new(languages: HashMap<String, String>) -> Self {
        Self { languages }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io(e.to_string())
            }
        })?;
        let file: LanguageConfigFile =
            serde_json::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(Self::new(file.languages))
    }

    pub fn name_of(&self, code: &str) -> Option<&str> {
        self.languages.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NotFound(PathBuf),
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(
                f,
                "The language configuration file does not exist. Path: {}",
                path.display()
            ),
            ConfigError::Io(msg) => write!(f, "Failed to read language configuration: {}", msg),
            ConfigError::Parse(msg) => write!(
                f,
                "Error occurred during loading language configuration file: {}",
                msg
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
