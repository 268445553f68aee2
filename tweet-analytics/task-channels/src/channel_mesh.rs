// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tweet_analytics_core::{ChannelError, ControlChannel, ControlMessage, Rank, COORDINATOR_RANK};

/// Messages in flight per direction between the coordinator and one worker
const CHANNEL_CAPACITY: usize = 1;

/// One rank's view of the mesh: a sender and a receiver per peer
pub struct ChannelEndpoint {
    rank: Rank,
    outbound: HashMap<Rank, mpsc::Sender<ControlMessage>>,
    inbound: HashMap<Rank, mpsc::Receiver<ControlMessage>>,
}

impl ChannelEndpoint {
    fn new(rank: Rank) -> Self {
        Self {
            rank,
            outbound: HashMap::new(),
            inbound: HashMap::new(),
        }
    }

    pub fn peers(&self) -> usize {
        self.outbound.len()
    }
}

/// Builds endpoints for ranks `0..worker_count`, indexed by rank.
///
/// Workers are linked to the coordinator only, never to each other.
pub fn channel_mesh(worker_count: usize) -> Vec<ChannelEndpoint> {
    let mut endpoints: Vec<ChannelEndpoint> = (0..worker_count).map(ChannelEndpoint::new).collect();

    for rank in (COORDINATOR_RANK + 1)..worker_count {
        let (down_tx, down_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (up_tx, up_rx) = mpsc::channel(CHANNEL_CAPACITY);

        endpoints[COORDINATOR_RANK].outbound.insert(rank, down_tx);
        endpoints[COORDINATOR_RANK].inbound.insert(rank, up_rx);
        endpoints[rank].outbound.insert(COORDINATOR_RANK, up_tx);
        endpoints[rank].inbound.insert(COORDINATOR_RANK, down_rx);
    }

    endpoints
}

#[async_trait]
impl ControlChannel for ChannelEndpoint {
    fn rank(&self) -> Rank {
        self.rank
    }

    async fn send(&mut self, to: Rank, message: ControlMessage) -> Result<(), ChannelError> {
        let tx = self
            .outbound
            .get(&to)
            .ok_or(ChannelError::UnknownRank(to))?;
        tx.send(message)
            .await
            .map_err(|_| ChannelError::Disconnected(to))
    }

    async fn recv(&mut self, from: Rank) -> Result<ControlMessage, ChannelError> {
        let rx = self
            .inbound
            .get_mut(&from)
            .ok_or(ChannelError::UnknownRank(from))?;
        rx.recv().await.ok_or(ChannelError::Disconnected(from))
    }
}
