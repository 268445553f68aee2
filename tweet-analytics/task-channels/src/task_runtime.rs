// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::channel_mesh::channel_mesh;
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::{error, info};
use tweet_analytics_core::{
    run_coordinator, run_worker, ControlChannel, CorpusScanner, ExtractionStrategy, MergedResult,
    PipelineError, Rank,
};

/// Runs every rank as a tokio task and returns the coordinator's merged counts
pub async fn run_analysis(
    corpus: &Path,
    strategy: ExtractionStrategy,
    worker_count: usize,
) -> Result<MergedResult, PipelineError> {
    assert!(worker_count > 0, "worker count must be at least 1");

    let mut endpoints = channel_mesh(worker_count).into_iter();
    let coordinator = endpoints
        .next()
        .expect("mesh always holds the coordinator endpoint");

    let mut workers: Vec<(Rank, JoinHandle<Result<(), PipelineError>>)> = Vec::new();
    for endpoint in endpoints {
        let rank = endpoint.rank();
        let scanner = CorpusScanner::new(rank, worker_count, strategy);
        let corpus: PathBuf = corpus.to_path_buf();
        let handle = tokio::spawn(async move { run_worker(endpoint, scanner, &corpus).await });
        workers.push((rank, handle));
    }
    info!("Started {} worker task(s)", workers.len());

    let scanner = CorpusScanner::new(coordinator.rank(), worker_count, strategy);
    let merged = run_coordinator(coordinator, scanner, corpus).await;

    for (rank, handle) in workers {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!("Worker [{}] failed: {}", rank, e),
            Err(e) => error!("Worker [{}] task failed: {}", rank, e),
        }
    }

    merged
}
