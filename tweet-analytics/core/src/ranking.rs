// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::frequency_map::FrequencyMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub key: String,
    pub count: u64,
}

impl RankingEntry {
    pub fn new(key: impl Into<String>, count: u64) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// The `k` most frequent keys, highest count first.
/// Equal counts keep the map's insertion order.
pub fn top_k(map: &FrequencyMap, k: usize) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = map
        .iter()
        .map(|(key, count)| RankingEntry::new(key, count))
        .collect();

    // Vec::sort_by is stable
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(k);
    entries
}
