// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::control_message::ControlMessage;
use crate::types::Rank;
use async_trait::async_trait;

/// Point-to-point message path between ranks.
/// Implemented over tokio channels for tasks and over TCP for processes.
///
/// Both operations wait without a deadline. A peer that never answers keeps
/// the caller waiting forever.
#[async_trait]
pub trait ControlChannel: Send {
    /// Rank owning this endpoint
    fn rank(&self) -> Rank;

    /// Delivers a message to `to`
    async fn send(&mut self, to: Rank, message: ControlMessage) -> Result<(), ChannelError>;

    /// Waits for the next message sent by `from`
    async fn recv(&mut self, from: Rank) -> Result<ControlMessage, ChannelError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    /// No path to this rank exists from the current endpoint
    UnknownRank(Rank),

    /// The peer went away before the exchange completed
    Disconnected(Rank),

    /// Transport level I/O failure
    Io(String),

    /// A frame could not be encoded or decoded
    Codec(String),
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::UnknownRank(rank) => write!(f, "No channel to rank [{}]", rank),
            ChannelError::Disconnected(rank) => write!(f, "Rank [{}] disconnected", rank),
            ChannelError::Io(msg) => write!(f, "Channel I/O error: {}", msg),
            ChannelError::Codec(msg) => write!(f, "Channel codec error: {}", msg),
        }
    }
}

impl std::error::Error for ChannelError {}
