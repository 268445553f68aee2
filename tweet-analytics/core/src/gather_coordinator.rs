// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::control_channel::ControlChannel;
use crate::control_message::ControlMessage;
use crate::corpus_scanner::CorpusScanner;
use crate::partial_result::{MergedResult, PartialResult};
use crate::pipeline_error::PipelineError;
use crate::types::{Rank, COORDINATOR_RANK};
use std::path::Path;
use tracing::{error, info};

/// Pulls every worker's counts into the coordinator's own.
///
/// Requests, receipts and exit signals all go out in ascending rank order,
/// one at a time.
pub struct GatherCoordinator<C: ControlChannel> {
    channel: C,
    worker_count: usize,
}

impl<C: ControlChannel> GatherCoordinator<C> {
    pub fn new(channel: C, worker_count: usize) -> Self {
        debug_assert_eq!(channel.rank(), COORDINATOR_RANK);
        Self {
            channel,
            worker_count,
        }
    }

    fn worker_ranks(&self) -> impl Iterator<Item = Rank> {
        (COORDINATOR_RANK + 1)..self.worker_count
    }

    pub async fn gather(&mut self, own: PartialResult) -> Result<MergedResult, PipelineError> {
        let mut merged = MergedResult::seeded(own);

        if self.worker_count <= 1 {
            return Ok(merged);
        }

        info!("Gathering analyzed data from all workers...");
        for rank in self.worker_ranks() {
            self.channel.send(rank, ControlMessage::RequestData).await?;
        }

        for rank in self.worker_ranks() {
            match self.channel.recv(rank).await? {
                ControlMessage::PartialResult(partial) => {
                    info!("Received analyzed data from [{}] rank.", rank);
                    merged.absorb(&partial);
                }
                other => {
                    error!(
                        "Unexpected {} from [{}] rank while gathering",
                        other.kind(),
                        rank
                    );
                    return Err(PipelineError::ProtocolViolation {
                        rank,
                        expected: "PartialResult",
                        received: other.kind(),
                    });
                }
            }
        }

        info!("Sending exit request to all workers...");
        for rank in self.worker_ranks() {
            self.channel.send(rank, ControlMessage::Exit).await?;
        }

        Ok(merged)
    }
}

/// Scans the coordinator's share of the corpus, then gathers every other rank
pub async fn run_coordinator<C: ControlChannel>(
    channel: C,
    scanner: CorpusScanner,
    corpus: &Path,
) -> Result<MergedResult, PipelineError> {
    info!("Performing analysis tasks on coordinator...");
    let own = scanner.scan(corpus).await?;

    let mut coordinator = GatherCoordinator::new(channel, scanner.worker_count());
    coordinator.gather(own).await
}
