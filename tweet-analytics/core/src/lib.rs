// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod types;
pub use types::{Rank, COORDINATOR_RANK, TOP_MOST_COMMON};

mod frequency_map;
pub use frequency_map::FrequencyMap;

mod partial_result;
pub use partial_result::{MergedResult, PartialResult};

mod local_aggregator;
pub use local_aggregator::LocalAggregator;

pub mod partition;
pub use partition::owns;

pub mod record_extractor;
pub use record_extractor::{extract_line, ExtractError, Extraction, ExtractionStrategy};

mod corpus_scanner;
pub use corpus_scanner::CorpusScanner;

mod control_message;
pub use control_message::ControlMessage;

mod control_channel;
pub use control_channel::{ChannelError, ControlChannel};

mod pipeline_error;
pub use pipeline_error::PipelineError;

mod gather_coordinator;
pub use gather_coordinator::{run_coordinator, GatherCoordinator};

mod worker_loop;
pub use worker_loop::{run_worker, ControlLoop, WorkerState};

pub mod ranking;
pub use ranking::{top_k, RankingEntry};

mod language_config;
pub use language_config::{ConfigError, LanguageConfig};

mod analysis_report;
pub use analysis_report::{format_count, AnalysisReport};
