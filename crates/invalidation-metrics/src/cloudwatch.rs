// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::errors::Error;
use crate::metric::MetricRecord;

/// Metrics sink the queue flushes to.
///
/// A single call must carry at most [`crate::constants::AWS_PAYLOAD_LIMIT`]
/// records; the queue enforces that bound before calling.
#[async_trait]
pub trait CloudWatchMetrics: Send + Sync {
    async fn put_metric_data(&self, namespace: &str, data: &[MetricRecord]) -> Result<(), Error>;
}
