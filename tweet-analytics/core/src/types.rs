// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Zero-based identifier of a worker within a run
pub type Rank = usize;

/// The only rank that gathers and reports
pub const COORDINATOR_RANK: Rank = 0;

/// Number of entries reported for each dimension
pub const TOP_MOST_COMMON: usize = 10;
