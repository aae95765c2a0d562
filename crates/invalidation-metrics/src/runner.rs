// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! One metrics-collection run, start to finish.
//!
//! List distributions, scan each one, write the optional log line, queue
//! two metric records, and flush whatever remains at the end. The first
//! unrecoverable error aborts the run; nothing queued is force-flushed on
//! the way out, the next scheduled invocation starts from scratch.

use std::sync::Arc;
use std::time::SystemTime;

use tracing::{debug, info};

use crate::cloudfront::CloudFront;
use crate::cloudwatch::CloudWatchMetrics;
use crate::cloudwatch_logs::CloudWatchLogs;
use crate::config::Config;
use crate::errors::Error;
use crate::logs::{resolve_log_destination, LogWriter};
use crate::queue::Queue;
use crate::scanner::scan_distribution;

pub struct Runner {
    cloudfront: Arc<dyn CloudFront>,
    queue: Queue,
    log_writer: LogWriter,
}

impl Runner {
    pub fn new(
        cloudfront: Arc<dyn CloudFront>,
        metrics: Arc<dyn CloudWatchMetrics>,
        logs: Arc<dyn CloudWatchLogs>,
        config: &Config,
    ) -> Self {
        Self {
            cloudfront,
            queue: Queue::new(metrics, config.namespace.clone(), config.dry_run),
            log_writer: LogWriter::new(logs, config.dry_run),
        }
    }

    /// Execute a single run against the current reference time.
    pub async fn run(&mut self) -> Result<(), Error> {
        self.run_at(SystemTime::now()).await
    }

    /// Execute a single run against an explicit reference time.
    pub async fn run_at(&mut self, reference_time: SystemTime) -> Result<(), Error> {
        debug!("listing distributions");
        let distributions = self.cloudfront.list_distributions().await?;
        info!(count = distributions.len(), "listed distributions");

        for distribution in &distributions {
            let activity =
                scan_distribution(self.cloudfront.as_ref(), reference_time, distribution).await?;

            if let Some(destination) =
                resolve_log_destination(self.cloudfront.as_ref(), &distribution.arn).await?
            {
                self.log_writer
                    .write(&destination, &activity, reference_time)
                    .await?;
            }

            for record in activity.metric_records(reference_time) {
                if self.queue.is_full() {
                    self.queue.flush().await?;
                }
                self.queue.add(record)?;
            }
        }

        self.queue.flush().await?;
        info!("run completed");

        Ok(())
    }
}
