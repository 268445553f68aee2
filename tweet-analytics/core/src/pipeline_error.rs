// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::control_channel::ChannelError;
use crate::types::Rank;
use std::path::PathBuf;

/// Failures that end the affected rank
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// The corpus file does not exist
    CorpusNotFound(PathBuf),

    /// Reading the corpus failed part way
    Io(String),

    /// The control channel failed
    Channel(ChannelError),

    /// A message arrived that the receiving side cannot accept in its state
    ProtocolViolation {
        rank: Rank,
        expected: &'static str,
        received: &'static str,
    },
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::CorpusNotFound(path) => {
                write!(f, "The twitter data file does not exist. Path: {}", path.display())
            }
            PipelineError::Io(msg) => write!(f, "Error occurred while reading twitter data: {}", msg),
            PipelineError::Channel(e) => write!(f, "{}", e),
            PipelineError::ProtocolViolation {
                rank,
                expected,
                received,
            } => write!(
                f,
                "Protocol violation on rank [{}]: expected {}, received {}",
                rank, expected, received
            ),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Channel(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ChannelError> for PipelineError {
    fn from(e: ChannelError) -> Self {
        PipelineError::Channel(e)
    }
}
