// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Batching queue for metric records.
//!
//! Buffers records in insertion order and flushes them to the injected
//! sink in a single call, never exceeding the provider's payload limit of
//! [`AWS_PAYLOAD_LIMIT`] records. A full queue rejects further adds; the
//! caller flushes and retries, so no data is ever silently dropped.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cloudwatch::CloudWatchMetrics;
use crate::constants::AWS_PAYLOAD_LIMIT;
use crate::errors::Error;
use crate::metric::MetricRecord;

pub struct Queue {
    namespace: String,
    sink: Arc<dyn CloudWatchMetrics>,
    dry_run: bool,
    data: Vec<MetricRecord>,
    full: bool,
}

impl Queue {
    pub fn new(sink: Arc<dyn CloudWatchMetrics>, namespace: impl Into<String>, dry_run: bool) -> Self {
        Self {
            namespace: namespace.into(),
            sink,
            dry_run,
            data: Vec::with_capacity(AWS_PAYLOAD_LIMIT),
            full: false,
        }
    }

    /// Append a record to the queue.
    ///
    /// Fails with [`Error::QueueFull`] when the queue already holds
    /// [`AWS_PAYLOAD_LIMIT`] records, leaving the buffered data unchanged.
    /// Callers are responsible for flushing first.
    pub fn add(&mut self, record: MetricRecord) -> Result<(), Error> {
        if self.data.len() == AWS_PAYLOAD_LIMIT {
            return Err(Error::QueueFull);
        }

        self.data.push(record);
        self.full = self.data.len() == AWS_PAYLOAD_LIMIT;

        Ok(())
    }

    /// Send all buffered records to the sink in one call.
    ///
    /// An empty queue is a no-op success. In dry-run mode the buffered
    /// records are discarded without touching the sink. On sink failure the
    /// buffer is left intact so the caller may retry.
    pub async fn flush(&mut self) -> Result<(), Error> {
        if self.data.is_empty() {
            return Ok(());
        }

        if self.dry_run {
            info!(
                count = self.data.len(),
                "dry-run is enabled, discarding queued metric data"
            );
            self.data.clear();
            self.full = false;
            return Ok(());
        }

        debug!(
            namespace = %self.namespace,
            count = self.data.len(),
            "flushing metric data"
        );

        self.sink
            .put_metric_data(&self.namespace, &self.data)
            .await?;

        self.data.clear();
        self.full = false;

        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::MetricRecord;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::SystemTime;

    /// Records every payload handed to it, optionally failing each call.
    struct RecordingSink {
        calls: Mutex<Vec<(String, Vec<MetricRecord>)>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CloudWatchMetrics for RecordingSink {
        async fn put_metric_data(
            &self,
            namespace: &str,
            data: &[MetricRecord],
        ) -> Result<(), Error> {
            if self.fail {
                return Err(Error::Sink {
                    source: "simulated sink failure".into(),
                });
            }
            self.calls
                .lock()
                .unwrap()
                .push((namespace.to_string(), data.to_vec()));
            Ok(())
        }
    }

    fn test_record(name: &str) -> MetricRecord {
        MetricRecord::count(name, 1.0, SystemTime::now(), Vec::new())
    }

    fn populate_to_limit(queue: &mut Queue) {
        while queue.len() < AWS_PAYLOAD_LIMIT {
            queue.add(test_record("TestResponse")).unwrap();
        }
    }

    #[test]
    fn test_add_tracks_full_state() {
        let mut queue = Queue::new(RecordingSink::new(), "dev/null", false);
        assert!(queue.is_empty());
        assert!(!queue.is_full());

        for i in 0..AWS_PAYLOAD_LIMIT {
            queue.add(test_record("TestResponse")).unwrap();
            assert!(queue.len() <= AWS_PAYLOAD_LIMIT);
            assert_eq!(queue.is_full(), i == AWS_PAYLOAD_LIMIT - 1);
        }
    }

    #[test]
    fn test_add_rejects_when_full() {
        let mut queue = Queue::new(RecordingSink::new(), "dev/null", false);
        populate_to_limit(&mut queue);
        assert!(queue.is_full());

        let err = queue.add(test_record("TestResponse")).unwrap_err();
        assert!(matches!(err, Error::QueueFull));
        // The buffered records are untouched by the rejected add.
        assert_eq!(queue.len(), AWS_PAYLOAD_LIMIT);
        assert!(queue.is_full());
    }

    #[tokio::test]
    async fn test_add_succeeds_again_after_flush() {
        let sink = RecordingSink::new();
        let mut queue = Queue::new(sink, "dev/null", false);
        populate_to_limit(&mut queue);
        assert!(matches!(
            queue.add(test_record("TestResponse")),
            Err(Error::QueueFull)
        ));

        queue.flush().await.unwrap();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        queue.add(test_record("TestResponse")).unwrap();
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test]
    async fn test_flush_sends_batch_and_clears() {
        let sink = RecordingSink::new();
        let mut queue = Queue::new(Arc::clone(&sink) as Arc<dyn CloudWatchMetrics>, "Skpr/CloudFront", false);
        queue.add(test_record("InvalidationRequest")).unwrap();
        queue.add(test_record("InvalidationPathCounter")).unwrap();

        queue.flush().await.unwrap();

        let calls = sink.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (namespace, data) = &calls[0];
        assert_eq!(namespace, "Skpr/CloudFront");
        assert_eq!(data.len(), 2);
        assert_eq!(data[0].name, "InvalidationRequest");
        assert_eq!(data[1].name, "InvalidationPathCounter");
        drop(calls);

        assert!(queue.is_empty());
        assert!(!queue.is_full());
    }

    #[tokio::test]
    async fn test_flush_empty_queue_is_noop() {
        let sink = RecordingSink::new();
        let mut queue = Queue::new(Arc::clone(&sink) as Arc<dyn CloudWatchMetrics>, "dev/null", false);

        queue.flush().await.unwrap();

        assert_eq!(sink.call_count(), 0);
    }

    #[tokio::test]
    async fn test_dry_run_never_calls_sink() {
        let sink = RecordingSink::new();
        let mut queue = Queue::new(Arc::clone(&sink) as Arc<dyn CloudWatchMetrics>, "dev/null", true);
        populate_to_limit(&mut queue);

        queue.flush().await.unwrap();

        assert_eq!(sink.call_count(), 0);
        // Records are discarded, not retained, so the queue can keep
        // accepting data.
        assert!(queue.is_empty());
        assert!(!queue.is_full());
    }

    #[tokio::test]
    async fn test_sink_failure_retains_data() {
        let sink = RecordingSink::failing();
        let mut queue = Queue::new(sink, "dev/null", false);
        queue.add(test_record("TestResponse")).unwrap();
        queue.add(test_record("TestResponse")).unwrap();

        let err = queue.flush().await.unwrap_err();
        assert!(matches!(err, Error::Sink { .. }));
        // Buffer is kept for a caller-driven retry.
        assert_eq!(queue.len(), 2);
    }
}
