// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Optional per-distribution log channel.
//!
//! A distribution opts in by carrying the log-group and log-stream tags;
//! when both are present, the run writes one structured log event with the
//! invalidation detail for that scan. Missing tags are a valid state and
//! skip the write entirely.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::{debug, info};

use crate::cloudfront::{CloudFront, Tag};
use crate::cloudwatch_logs::{CloudWatchLogs, LogEvent};
use crate::constants::{TAG_LOG_GROUP, TAG_LOG_STREAM};
use crate::errors::Error;
use crate::scanner::InvalidationActivity;

/// Externally-configured log group/stream pair for a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDestination {
    pub group: String,
    pub stream: String,
}

/// Read the distribution's resource tags and look for the two well-known
/// log destination keys. Both present yields a destination; anything less
/// yields `None`. An API failure listing the tags is fatal.
pub async fn resolve_log_destination(
    cloudfront: &dyn CloudFront,
    arn: &str,
) -> Result<Option<LogDestination>, Error> {
    let tags = cloudfront.list_tags_for_resource(arn).await?;

    let find = |key: &str| {
        tags.iter()
            .find(|tag: &&Tag| tag.key == key)
            .map(|tag| tag.value.clone())
    };

    match (find(TAG_LOG_GROUP), find(TAG_LOG_STREAM)) {
        (Some(group), Some(stream)) => Ok(Some(LogDestination { group, stream })),
        _ => {
            debug!(arn = %arn, "no log destination tags, skipping log write");
            Ok(None)
        }
    }
}

#[derive(Serialize)]
struct InvalidationLogMessage<'a> {
    #[serde(rename = "InvalidationRequestID")]
    requests: u64,
    #[serde(rename = "InvalidationPathCount")]
    path_count: u64,
    #[serde(rename = "InvalidatedPaths")]
    paths: &'a [String],
}

/// Writes per-distribution invalidation detail to the log sink.
pub struct LogWriter {
    sink: Arc<dyn CloudWatchLogs>,
    dry_run: bool,
}

impl LogWriter {
    pub fn new(sink: Arc<dyn CloudWatchLogs>, dry_run: bool) -> Self {
        Self { sink, dry_run }
    }

    /// Ensure the destination exists and write one event carrying the
    /// activity for this scan.
    pub async fn write(
        &self,
        destination: &LogDestination,
        activity: &InvalidationActivity,
        timestamp: SystemTime,
    ) -> Result<(), Error> {
        if self.dry_run {
            info!(
                group = %destination.group,
                stream = %destination.stream,
                "dry-run is enabled, skipping log write"
            );
            return Ok(());
        }

        let message = serde_json::to_string(&InvalidationLogMessage {
            requests: activity.requests,
            path_count: activity.paths,
            paths: &activity.invalidated_paths,
        })
        .map_err(|err| Error::LogWrite {
            group: destination.group.clone(),
            stream: destination.stream.clone(),
            source: Box::new(err),
        })?;

        let timestamp_millis = timestamp
            .duration_since(UNIX_EPOCH)
            .map_err(|err| Error::TimeParse {
                source: Box::new(err),
            })?
            .as_millis() as i64;

        self.sink.ensure_log_group(&destination.group).await?;
        self.sink
            .ensure_log_stream(&destination.group, &destination.stream)
            .await?;
        self.sink
            .put_log_events(
                &destination.group,
                &destination.stream,
                vec![LogEvent {
                    message,
                    timestamp_millis,
                }],
            )
            .await?;

        debug!(
            group = %destination.group,
            stream = %destination.stream,
            "flushed log events"
        );

        Ok(())
    }
}
