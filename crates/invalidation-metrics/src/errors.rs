// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

/// Boxed cause carried by errors that wrap a provider failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the invalidation metrics job.
///
/// Only [`Error::QueueFull`] is recoverable (flush, then retry the add);
/// everything else aborts the run and relies on the next scheduled
/// invocation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("queue is full, flush required before adding metric data")]
    QueueFull,

    #[error("failed to put metric data: {source}")]
    Sink { source: BoxError },

    #[error("failed to write log events to {group}/{stream}: {source}")]
    LogWrite {
        group: String,
        stream: String,
        source: BoxError,
    },

    #[error("failed to list {resource}: {source}")]
    UpstreamList {
        resource: &'static str,
        source: BoxError,
    },

    #[error("failed to get invalidation {id}: {source}")]
    UpstreamDetail { id: String, source: BoxError },

    #[error("failed to list tags for {arn}: {source}")]
    TagResolution { arn: String, source: BoxError },

    #[error("malformed timestamp from provider: {source}")]
    TimeParse { source: BoxError },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_full_display() {
        let error = Error::QueueFull;
        assert_eq!(
            error.to_string(),
            "queue is full, flush required before adding metric data"
        );
    }

    #[test]
    fn test_upstream_list_carries_resource() {
        let error = Error::UpstreamList {
            resource: "distributions",
            source: "connection reset".into(),
        };
        assert_eq!(
            error.to_string(),
            "failed to list distributions: connection reset"
        );
    }

    #[test]
    fn test_sink_error_carries_source() {
        let error = Error::Sink {
            source: "throttled".into(),
        };
        assert!(error.to_string().contains("throttled"));
    }
}
