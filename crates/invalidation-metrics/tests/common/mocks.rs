// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Mock implementations of the provider and sink traits for testing

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use invalidation_metrics::cloudfront::{
    CloudFront, DistributionSummary, InvalidationDetail, InvalidationSummary, Tag,
};
use invalidation_metrics::cloudwatch::CloudWatchMetrics;
use invalidation_metrics::cloudwatch_logs::{CloudWatchLogs, LogEvent};
use invalidation_metrics::errors::Error;
use invalidation_metrics::metric::MetricRecord;

/// Canned CloudFront state: distributions, their invalidation listings,
/// invalidation detail, and resource tags keyed by ARN.
#[derive(Default)]
pub struct MockCloudFront {
    pub distributions: Vec<DistributionSummary>,
    pub invalidations: HashMap<String, Vec<InvalidationSummary>>,
    pub details: HashMap<String, InvalidationDetail>,
    pub tags: HashMap<String, Vec<Tag>>,
}

#[async_trait]
impl CloudFront for MockCloudFront {
    async fn list_distributions(&self) -> Result<Vec<DistributionSummary>, Error> {
        Ok(self.distributions.clone())
    }

    async fn list_invalidations(
        &self,
        distribution_id: &str,
    ) -> Result<Vec<InvalidationSummary>, Error> {
        Ok(self
            .invalidations
            .get(distribution_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_invalidation(
        &self,
        _distribution_id: &str,
        invalidation_id: &str,
    ) -> Result<InvalidationDetail, Error> {
        self.details
            .get(invalidation_id)
            .cloned()
            .ok_or_else(|| Error::UpstreamDetail {
                id: invalidation_id.to_string(),
                source: "unknown invalidation".into(),
            })
    }

    async fn list_tags_for_resource(&self, arn: &str) -> Result<Vec<Tag>, Error> {
        Ok(self.tags.get(arn).cloned().unwrap_or_default())
    }
}

/// Metrics sink that records every payload, optionally failing all calls.
#[derive(Default)]
pub struct MockCloudWatch {
    pub calls: Mutex<Vec<(String, Vec<MetricRecord>)>>,
    pub fail: bool,
}

#[async_trait]
impl CloudWatchMetrics for MockCloudWatch {
    async fn put_metric_data(&self, namespace: &str, data: &[MetricRecord]) -> Result<(), Error> {
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

/// Log sink that records groups, streams and events as they are written.
#[derive(Default)]
pub struct MockCloudWatchLogs {
    pub groups: Mutex<Vec<String>>,
    pub streams: Mutex<Vec<(String, String)>>,
    pub events: Mutex<Vec<(String, String, Vec<LogEvent>)>>,
}

#[async_trait]
impl CloudWatchLogs for MockCloudWatchLogs {
    async fn ensure_log_group(&self, group: &str) -> Result<(), Error> {
        self.groups.lock().unwrap().push(group.to_string());
        Ok(())
    }

    async fn ensure_log_stream(&self, group: &str, stream: &str) -> Result<(), Error> {
        self.streams
            .lock()
            .unwrap()
            .push((group.to_string(), stream.to_string()));
        Ok(())
    }

    async fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
    ) -> Result<(), Error> {
        self.events
            .lock()
            .unwrap()
            .push((group.to_string(), stream.to_string(), events));
        Ok(())
    }
}
