// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::partial_result::PartialResult;
use serde::{Deserialize, Serialize};

/// Every message exchanged between the coordinator and a worker
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ControlMessage {
    /// Coordinator asks a worker for its counts
    RequestData,
    /// Coordinator tells a worker to terminate
    Exit,
    /// Worker answers a data request
    PartialResult(PartialResult),
}

impl ControlMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            ControlMessage::RequestData => "RequestData",
            ControlMessage::Exit => "Exit",
            ControlMessage::PartialResult(_) => "PartialResult",
        }
    }
}
