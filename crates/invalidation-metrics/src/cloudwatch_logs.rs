// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::errors::Error;

/// One event destined for the log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub message: String,
    pub timestamp_millis: i64,
}

/// Log sink for per-distribution invalidation detail.
///
/// The `ensure_*` operations are idempotent: an already-existing group or
/// stream is success, only a genuine API failure is an error.
#[async_trait]
pub trait CloudWatchLogs: Send + Sync {
    async fn ensure_log_group(&self, group: &str) -> Result<(), Error>;

    async fn ensure_log_stream(&self, group: &str, stream: &str) -> Result<(), Error>;

    async fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
    ) -> Result<(), Error>;
}
