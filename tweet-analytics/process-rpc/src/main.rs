// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tweet_analytics_core::{
    run_coordinator, run_worker, AnalysisReport, CorpusScanner, ExtractionStrategy,
    LanguageConfig, Rank, COORDINATOR_RANK,
};
use tweet_analytics_process_rpc::{TcpControlChannel, WorkerProcesses};

/// Counts hashtags and languages with one OS process per rank
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Twitter data file, one record per line after a header line
    #[arg(short = 'd', long)]
    data: PathBuf,

    /// Language configuration file with a "languages" object
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Number of ranks, coordinator included
    #[arg(short = 'n', long, default_value_t = 1)]
    workers: usize,

    /// Hashtag extraction strategy: "entities" or "text"
    #[arg(short = 's', long, default_value_t = ExtractionStrategy::Entities)]
    strategy: ExtractionStrategy,

    #[arg(long, hide = true)]
    worker: bool,

    #[arg(long, hide = true)]
    rank: Option<Rank>,

    #[arg(long, hide = true)]
    coordinator: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    anyhow::ensure!(cli.workers > 0, "At least one worker is required");

    if cli.worker {
        run_worker_process(cli).await
    } else {
        run_coordinator_process(cli).await
    }
}

async fn run_worker_process(cli: Cli) -> anyhow::Result<()> {
    let rank = cli.rank.context("Worker mode requires --rank")?;
    let coordinator = cli
        .coordinator
        .context("Worker mode requires --coordinator")?;
    anyhow::ensure!(
        rank != COORDINATOR_RANK && rank < cli.workers,
        "Rank {} is not a worker rank for {} workers",
        rank,
        cli.workers
    );

    let channel = TcpControlChannel::connect(coordinator, rank)
        .await
        .with_context(|| format!("Worker [{}] could not reach the coordinator", rank))?;
    let scanner = CorpusScanner::new(rank, cli.workers, cli.strategy);

    run_worker(channel, scanner, &cli.data)
        .await
        .with_context(|| format!("Worker [{}] failed", rank))
}

async fn run_coordinator_process(cli: Cli) -> anyhow::Result<()> {
    let start_time = Instant::now();

    let config = cli.config.as_ref().context(
        "The language configuration file path is not specified in command line arguments.",
    )?;
    let languages = LanguageConfig::load(config)?;

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .context("Failed to bind coordinator listener")?;
    let addr = listener.local_addr()?;
    info!("Coordinator listening on {}", addr);

    let workers = WorkerProcesses::spawn(addr, cli.workers, &cli.data, cli.strategy)
        .context("Failed to spawn worker processes")?;
    let channel = TcpControlChannel::accept_workers(&listener, cli.workers).await?;

    let scanner = CorpusScanner::new(COORDINATOR_RANK, cli.workers, cli.strategy);
    let merged = run_coordinator(channel, scanner, &cli.data).await?;

    let failures = workers.wait().await;
    if failures > 0 {
        warn!("{} worker process(es) exited unsuccessfully", failures);
    }

    let report = AnalysisReport::from_merged(&merged);
    print!("{}", report.render(&languages));

    println!(
        "\nTotal processing time is : {:.4} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
