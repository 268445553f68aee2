// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::local_aggregator::LocalAggregator;
use crate::partial_result::PartialResult;
use crate::partition::{owns, HEADER_LINE};
use crate::pipeline_error::PipelineError;
use crate::record_extractor::{extract_line, ExtractError, ExtractionStrategy};
use crate::types::{Rank, COORDINATOR_RANK};
use std::path::Path;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};
use tracing::{debug, info, warn};

/// Streams the corpus once and counts the lines owned by one rank
#[derive(Debug, Clone, Copy)]
pub struct CorpusScanner {
    rank: Rank,
    worker_count: usize,
    strategy: ExtractionStrategy,
}

impl CorpusScanner {
    pub fn new(rank: Rank, worker_count: usize, strategy: ExtractionStrategy) -> Self {
        assert!(worker_count > 0, "worker count must be at least 1");
        assert!(rank < worker_count, "rank {} out of range", rank);
        Self {
            rank,
            worker_count,
            strategy,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    pub async fn scan(&self, path: &Path) -> Result<PartialResult, PipelineError> {
        let file = File::open(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PipelineError::CorpusNotFound(path.to_path_buf())
            } else {
                PipelineError::Io(e.to_string())
            }
        })?;

        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut aggregator = LocalAggregator::new();
        let mut line_index = 0;
        let mut owned = 0u64;
        let mut skipped = 0u64;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| PipelineError::Io(format!("rank [{}]: {}", self.rank, e)))?;
            if read == 0 {
                break;
            }

            let index = line_index;
            line_index += 1;

            if index == HEADER_LINE {
                if self.rank == COORDINATOR_RANK {
                    debug!("Ignore header line.");
                }
                continue;
            }
            if !owns(index, self.worker_count, self.rank) {
                continue;
            }

            owned += 1;
            let decoded = std::str::from_utf8(&buf)
                .map_err(|e| ExtractError::Decode(e.to_string()))
                .and_then(|line| extract_line(line, self.strategy));
            match decoded {
                Ok(extraction) => aggregator.observe_extraction(&extraction),
                Err(e) => {
                    skipped += 1;
                    warn!(
                        rank = self.rank,
                        "Failed to decode record from [{}] rank. Error: {}", self.rank, e
                    );
                    warn!(
                        rank = self.rank,
                        "Processed tweet: {}",
                        String::from_utf8_lossy(&buf).trim_end()
                    );
                }
            }
        }

        info!(
            "Rank [{}] scanned {} owned lines ({} skipped)",
            self.rank, owned, skipped
        );
        Ok(aggregator.finish())
    }
}
