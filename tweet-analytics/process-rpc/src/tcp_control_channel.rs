// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use bytes::Bytes;
use futures::{SinkExt, StreamExt};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::{Framed, LengthDelimitedCodec};
use tracing::{debug, info, warn};
use tweet_analytics_core::{ChannelError, ControlChannel, ControlMessage, Rank, COORDINATOR_RANK};

const CONNECT_ATTEMPTS: u32 = 20;
const CONNECT_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Upper bound for one frame. A partial result grows with the number of
/// distinct hashtags a rank saw, so this is far above the codec default.
const MAX_FRAME_LENGTH: usize = 1 << 30;

type FramedStream = Framed<TcpStream, LengthDelimitedCodec>;

/// First frame on every connection, naming the worker behind it
#[derive(Serialize, Deserialize, Debug)]
struct Hello {
    rank: Rank,
}

/// Control channel over one TCP connection per coordinator/worker pair.
/// Each frame is a length-prefixed JSON `ControlMessage`.
pub struct TcpControlChannel {
    rank: Rank,
    peers: HashMap<Rank, FramedStream>,
}

impl TcpControlChannel {
    /// Coordinator side: accepts one connection for every worker rank.
    ///
    /// Waits without a deadline; a worker that never connects blocks this call.
    pub async fn accept_workers(
        listener: &TcpListener,
        worker_count: usize,
    ) -> Result<Self, ChannelError> {
        let expected = worker_count.saturating_sub(1);
        let mut peers = HashMap::with_capacity(expected);

        while peers.len() < expected {
            let (stream, addr) = listener
                .accept()
                .await
                .map_err(|e| ChannelError::Io(e.to_string()))?;
            let mut framed = frame_stream(stream);

            let hello = match read_frame::<Hello>(&mut framed).await {
                Ok(Some(hello)) => hello,
                Ok(None) => {
                    warn!("Connection from {} closed before handshake", addr);
                    continue;
                }
                Err(e) => {
                    warn!("Rejected connection from {}: {}", addr, e);
                    continue;
                }
            };

            let rank = hello.rank;
            if rank == COORDINATOR_RANK || rank >= worker_count || peers.contains_key(&rank) {
                warn!("Rejected handshake for rank [{}] from {}", rank, addr);
                continue;
            }

            info!("Rank [{}] connected from {}", rank, addr);
            peers.insert(rank, framed);
        }

        Ok(Self {
            rank: COORDINATOR_RANK,
            peers,
        })
    }

    /// Worker side: connects to the coordinator and announces `rank`
    pub async fn connect(coordinator: SocketAddr, rank: Rank) -> Result<Self, ChannelError> {
        let stream = connect_with_retry(coordinator).await?;
        let mut framed = frame_stream(stream);
        write_frame(&mut framed, &Hello { rank }).await?;
        debug!("Rank [{}] connected to coordinator at {}", rank, coordinator);

        Ok(Self {
            rank,
            peers: HashMap::from([(COORDINATOR_RANK, framed)]),
        })
    }

    pub fn peers(&self) -> usize {
        self.peers.len()
    }
}

#[async_trait]
impl ControlChannel for TcpControlChannel {
    fn rank(&self) -> Rank {
        self.rank
    }

    async fn send(&mut self, to: Rank, message: ControlMessage) -> Result<(), ChannelError> {
        let framed = self
            .peers
            .get_mut(&to)
            .ok_or(ChannelError::UnknownRank(to))?;
        write_frame(framed, &message).await
    }

    async fn recv(&mut self, from: Rank) -> Result<ControlMessage, ChannelError> {
        let framed = self
            .peers
            .get_mut(&from)
            .ok_or(ChannelError::UnknownRank(from))?;
        read_frame(framed)
            .await?
            .ok_or(ChannelError::Disconnected(from))
    }
}

fn frame_stream(stream: TcpStream) -> FramedStream {
    let codec = LengthDelimitedCodec::builder()
        .max_frame_length(MAX_FRAME_LENGTH)
        .new_codec();
    Framed::new(stream, codec)
}

// Only establishing the connection is retried; the protocol itself never is.
async fn connect_with_retry(addr: SocketAddr) -> Result<TcpStream, ChannelError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        match TcpStream::connect(addr).await {
            Ok(stream) => return Ok(stream),
            Err(e) if attempt >= CONNECT_ATTEMPTS => {
                return Err(ChannelError::Io(format!(
                    "Failed to connect to {} after {} attempts: {}",
                    addr, attempt, e
                )));
            }
            Err(_) => tokio::time::sleep(CONNECT_RETRY_DELAY).await,
        }
    }
}

async fn write_frame<T: Serialize>(
    framed: &mut FramedStream,
    value: &T,
) -> Result<(), ChannelError> {
    let body = serde_json::to_vec(value).map_err(|e| ChannelError::Codec(e.to_string()))?;
    framed
        .send(Bytes::from(body))
        .await
        .map_err(|e| ChannelError::Io(e.to_string()))
}

/// `Ok(None)` once the peer has closed the connection
async fn read_frame<T: DeserializeOwned>(
    framed: &mut FramedStream,
) -> Result<Option<T>, ChannelError> {
    match framed.next().await {
        Some(Ok(bytes)) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| ChannelError::Codec(e.to_string())),
        Some(Err(e)) => Err(ChannelError::Io(e.to_string())),
        None => Ok(None),
    }
}
