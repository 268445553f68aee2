// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::control_channel::ControlChannel;
use crate::control_message::ControlMessage;
use crate::corpus_scanner::CorpusScanner;
use crate::partial_result::PartialResult;
use crate::pipeline_error::PipelineError;
use crate::types::{Rank, COORDINATOR_RANK};
use std::path::Path;
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    Scanning,
    AwaitingControl,
    Responded,
    Terminated,
}

/// Non-coordinator side of the gather protocol
pub struct ControlLoop<C: ControlChannel> {
    channel: C,
    partial: PartialResult,
    state: WorkerState,
    responses: usize,
}

impl<C: ControlChannel> ControlLoop<C> {
    /// A loop whose partial result is already known
    pub fn new(channel: C, partial: PartialResult) -> Self {
        let mut control = Self::scanning(channel);
        control.finish_scan(partial);
        control
    }

    /// A loop for a rank that is still scanning; it serves nothing until
    /// `finish_scan` freezes its partial result.
    pub fn scanning(channel: C) -> Self {
        Self {
            channel,
            partial: PartialResult::default(),
            state: WorkerState::Scanning,
            responses: 0,
        }
    }

    pub fn finish_scan(&mut self, partial: PartialResult) {
        debug_assert_eq!(self.state, WorkerState::Scanning);
        self.partial = partial;
        self.state = WorkerState::AwaitingControl;
    }

    pub fn rank(&self) -> Rank {
        self.channel.rank()
    }

    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Number of times the partial result has been sent
    pub fn responses(&self) -> usize {
        self.responses
    }

    /// Waits for one control message and reacts to it
    pub async fn step(&mut self) -> Result<WorkerState, PipelineError> {
        debug_assert_ne!(self.state, WorkerState::Scanning);
        let message = self.channel.recv(COORDINATOR_RANK).await?;

        match message {
            ControlMessage::RequestData => {
                debug!("Rank [{}] returning analyzed data", self.rank());
                self.channel
                    .send(
                        COORDINATOR_RANK,
                        ControlMessage::PartialResult(self.partial.clone()),
                    )
                    .await?;
                self.responses += 1;
                self.state = WorkerState::Responded;
            }
            ControlMessage::Exit => {
                debug!("Rank [{}] received exit request", self.rank());
                self.state = WorkerState::Terminated;
            }
            other => {
                error!(
                    "Rank [{}] received unexpected {} from coordinator",
                    self.rank(),
                    other.kind()
                );
                return Err(PipelineError::ProtocolViolation {
                    rank: self.rank(),
                    expected: "RequestData or Exit",
                    received: other.kind(),
                });
            }
        }

        Ok(self.state)
    }

    /// Serves control messages until told to exit
    pub async fn run(mut self) -> Result<usize, PipelineError> {
        loop {
            if self.step().await? == WorkerState::Terminated {
                return Ok(self.responses);
            }
        }
    }
}

/// Scans the rank's share of the corpus, then serves the coordinator
pub async fn run_worker<C: ControlChannel>(
    channel: C,
    scanner: CorpusScanner,
    corpus: &Path,
) -> Result<(), PipelineError> {
    let rank = channel.rank();
    debug_assert_eq!(rank, scanner.rank());

    let mut control = ControlLoop::scanning(channel);
    control.finish_scan(scanner.scan(corpus).await?);
    let responses = control.run().await?;

    info!("Rank [{}] exiting after {} response(s)", rank, responses);
    Ok(())
}
