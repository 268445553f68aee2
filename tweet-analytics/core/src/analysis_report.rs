// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::language_config::LanguageConfig;
use crate::partial_result::MergedResult;
use crate::ranking::{top_k, RankingEntry};
use crate::types::TOP_MOST_COMMON;
use std::fmt::Write;

const LANG_UNDEFINED: &str = "Undefined";

/// Final rankings handed to the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub top_hashtags: Vec<RankingEntry>,
    pub top_languages: Vec<RankingEntry>,
}

impl AnalysisReport {
    pub fn from_merged(merged: &MergedResult) -> Self {
        Self {
            top_hashtags: top_k(&merged.hashtags, TOP_MOST_COMMON),
            top_languages: top_k(&merged.languages, TOP_MOST_COMMON),
        }
    }

    pub fn render(&self, languages: &LanguageConfig) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "\nTop {} most commonly used hashtags:", TOP_MOST_COMMON);
        for (i, entry) in self.top_hashtags.iter().enumerate() {
            let _ = writeln!(
                out,
                "{}. #{}, {}",
                i + 1,
                entry.key,
                format_count(entry.count)
            );
        }

        let _ = writeln!(out, "\nTop {} most commonly used languages:", TOP_MOST_COMMON);
        for (i, entry) in self.top_languages.iter().enumerate() {
            let name = languages.name_of(&entry.key).unwrap_or(LANG_UNDEFINED);
            let _ = writeln!(
                out,
                "{}. {} ({}), {}",
                i + 1,
                name,
                entry.key,
                format_count(entry.count)
            );
        }

        out
    }
}

/// Formats a count with `,` between groups of three digits
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
