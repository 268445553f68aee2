// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Occurrence counts keyed by hashtag or language code.
///
/// Iteration follows first-observation order. The ranking selector relies on
/// it to break ties, so the order survives serialization as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    counts: IndexMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence, creating the key at 1 if absent
    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, count: u64) {
        match self.counts.get_mut(key) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(key.to_string(), count);
            }
        }
    }

    /// Key-wise summation. Keys unknown to `self` are appended in `other`'s order.
    pub fn merge(&mut self, other: &FrequencyMap) {
        for (key, count) in other.iter() {
            self.add(key, count);
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(key, count)| (key.as_str(), *count))
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut map = FrequencyMap::new();
        for key in iter {
            map.increment(key);
        }
        map
    }
}
