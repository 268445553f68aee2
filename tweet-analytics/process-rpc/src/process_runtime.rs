// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::net::SocketAddr;
use std::path::Path;
use tokio::process::{Child, Command};
use tracing::{debug, error, info, warn};
use tweet_analytics_core::{ExtractionStrategy, Rank, COORDINATOR_RANK};

/// Child processes running ranks `1..worker_count`.
/// Dropping the handle kills any child that is still running.
pub struct WorkerProcesses {
    children: Vec<(Rank, Child)>,
}

impl WorkerProcesses {
    /// Re-launches the current executable once per worker rank
    pub fn spawn(
        coordinator: SocketAddr,
        worker_count: usize,
        data: &Path,
        strategy: ExtractionStrategy,
    ) -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let mut children = Vec::new();

        for rank in (COORDINATOR_RANK + 1)..worker_count {
            let child = Command::new(&exe)
                .arg("--worker")
                .arg("--rank")
                .arg(rank.to_string())
                .arg("--workers")
                .arg(worker_count.to_string())
                .arg("--coordinator")
                .arg(coordinator.to_string())
                .arg("--data")
                .arg(data)
                .arg("--strategy")
                .arg(strategy.as_str())
                .kill_on_drop(true)
                .spawn()?;

            debug!("Spawned worker [{}] as pid {:?}", rank, child.id());
            children.push((rank, child));
        }

        if !children.is_empty() {
            info!("Spawned {} worker process(es)", children.len());
        }
        Ok(Self { children })
    }

    /// Waits for every child; returns how many exited unsuccessfully
    pub async fn wait(mut self) -> usize {
        let mut failures = 0;
        for (rank, child) in self.children.iter_mut() {
            match child.wait().await {
                Ok(status) if status.success() => debug!("Worker [{}] exited", rank),
                Ok(status) => {
                    failures += 1;
                    warn!("Worker [{}] exited with {}", rank, status);
                }
                Err(e) => {
                    failures += 1;
                    error!("Failed to wait for worker [{}]: {}", rank, e);
                }
            }
        }
        failures
    }
}
