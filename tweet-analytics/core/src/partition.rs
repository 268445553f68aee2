// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::types::Rank;

/// Index of the header line, owned by no worker
pub const HEADER_LINE: usize = 0;

/// Whether `rank` processes the line at `line_index`.
///
/// Every line after the header belongs to exactly one rank in `0..worker_count`.
pub fn owns(line_index: usize, worker_count: usize, rank: Rank) -> bool {
    line_index != HEADER_LINE && line_index % worker_count == rank
}

/// The rank owning `line_index`, or `None` for the header
pub fn owner_of(line_index: usize, worker_count: usize) -> Option<Rank> {
    if line_index == HEADER_LINE {
        None
    } else {
        Some(line_index % worker_count)
    }
}
