// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::frequency_map::FrequencyMap;
use crate::partial_result::PartialResult;
use crate::record_extractor::Extraction;

/// Per-worker counters, fed one owned line at a time
#[derive(Debug, Default)]
pub struct LocalAggregator {
    hashtags: FrequencyMap,
    languages: FrequencyMap,
}

impl LocalAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe<S: AsRef<str>>(&mut self, hashtags: &[S], language: Option<&str>) {
        for hashtag in hashtags {
            self.hashtags.increment(hashtag.as_ref());
        }
        if let Some(language) = language {
            self.languages.increment(language);
        }
    }

    pub fn observe_extraction(&mut self, extraction: &Extraction) {
        self.observe(&extraction.hashtags, extraction.language.as_deref());
    }

    /// Freezes the counters. Nothing mutates them afterwards.
    pub fn finish(self) -> PartialResult {
        PartialResult::new(self.hashtags, self.languages)
    }
}
