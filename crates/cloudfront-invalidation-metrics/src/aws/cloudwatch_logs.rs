// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use aws_sdk_cloudwatchlogs::types::InputLogEvent;

use invalidation_metrics::cloudwatch_logs::{CloudWatchLogs, LogEvent};
use invalidation_metrics::errors::Error;

/// CloudWatch Logs-backed log sink.
///
/// Group and stream creation tolerate the resource already existing, so
/// repeated runs against the same destination are idempotent.
pub struct CloudWatchLogsClient {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogsClient {
    pub fn new(client: aws_sdk_cloudwatchlogs::Client) -> Self {
        Self { client }
    }
}

fn log_write_error(group: &str, stream: &str, source: impl std::error::Error + Send + Sync + 'static) -> Error {
    Error::LogWrite {
        group: group.to_string(),
        stream: stream.to_string(),
        source: Box::new(source),
    }
}

#[async_trait]
impl CloudWatchLogs for CloudWatchLogsClient {
    async fn ensure_log_group(&self, group: &str) -> Result<(), Error> {
        match self
            .client
            .create_log_group()
            .log_group_name(group)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_resource_already_exists_exception() {
                    return Ok(());
                }
                Err(log_write_error(group, "", service_err))
            }
        }
    }

    async fn ensure_log_stream(&self, group: &str, stream: &str) -> Result<(), Error> {
        match self
            .client
            .create_log_stream()
            .log_group_name(group)
            .log_stream_name(stream)
            .send()
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_resource_already_exists_exception() {
                    return Ok(());
                }
                Err(log_write_error(group, stream, service_err))
            }
        }
    }

    async fn put_log_events(
        &self,
        group: &str,
        stream: &str,
        events: Vec<LogEvent>,
    ) -> Result<(), Error> {
        let log_events = events
            .into_iter()
            .map(|event| {
                InputLogEvent::builder()
                    .message(event.message)
                    .timestamp(event.timestamp_millis)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| log_write_error(group, stream, err))?;

        self.client
            .put_log_events()
            .log_group_name(group)
            .log_stream_name(stream)
            .set_log_events(Some(log_events))
            .send()
            .await
            .map_err(|err| log_write_error(group, stream, err))?;

        Ok(())
    }
}
