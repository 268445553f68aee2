// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tweet_analytics_core::{AnalysisReport, ExtractionStrategy, LanguageConfig};
use tweet_analytics_task_channels::run_analysis;

/// Counts hashtags and languages with every rank running as a tokio task
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Twitter data file, one record per line after a header line
    #[arg(short = 'd', long)]
    data: PathBuf,

    /// Language configuration file with a "languages" object
    #[arg(short = 'c', long)]
    config: PathBuf,

    /// Number of ranks, coordinator included
    #[arg(short = 'n', long, default_value_t = 4)]
    workers: usize,

    /// Hashtag extraction strategy: "entities" or "text"
    #[arg(short = 's', long, default_value_t = ExtractionStrategy::Entities)]
    strategy: ExtractionStrategy,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let start_time = Instant::now();
    let cli = Cli::parse();
    anyhow::ensure!(cli.workers > 0, "At least one worker is required");

    let languages = LanguageConfig::load(&cli.config).context("Failed to load languages")?;
    info!(
        "Analyzing {} with {} rank(s), {} strategy",
        cli.data.display(),
        cli.workers,
        cli.strategy
    );

    let merged = run_analysis(&cli.data, cli.strategy, cli.workers)
        .await
        .context("Analysis failed")?;

    let report = AnalysisReport::from_merged(&merged);
    print!("{}", report.render(&languages));

    println!(
        "\nTotal processing time is : {:.4} seconds",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
