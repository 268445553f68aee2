// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::frequency_map::FrequencyMap;
use serde::{Deserialize, Serialize};

/// Hashtag and language counts computed by one worker
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialResult {
    pub hashtags: FrequencyMap,
    pub languages: FrequencyMap,
}

impl PartialResult {
    pub fn new(hashtags: FrequencyMap, languages: FrequencyMap) -> Self {
        Self {
            hashtags,
            languages,
        }
    }
}

/// Coordinator-side accumulation of every worker's counts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedResult {
    pub hashtags: FrequencyMap,
    pub languages: FrequencyMap,
}

impl MergedResult {
    /// Seeds the merge with the coordinator's own counts
    pub fn seeded(own: PartialResult) -> Self {
        Self {
            hashtags: own.hashtags,
            languages: own.languages,
        }
    }

    pub fn absorb(&mut self, partial: &PartialResult) {
        self.hashtags.merge(&partial.hashtags);
        self.languages.merge(&partial.languages);
    }
}
