// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod process_runtime;
pub use process_runtime::WorkerProcesses;

pub mod tcp_control_channel;
pub use tcp_control_channel::TcpControlChannel;
