// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod channel_mesh;
pub use channel_mesh::{channel_mesh, ChannelEndpoint};

pub mod task_runtime;
pub use task_runtime::run_analysis;
