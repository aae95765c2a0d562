// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use aws_sdk_cloudwatch::primitives::DateTime;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};

use invalidation_metrics::cloudwatch::CloudWatchMetrics;
use invalidation_metrics::errors::Error;
use invalidation_metrics::metric::{MetricRecord, Unit};

/// CloudWatch-backed metrics sink.
pub struct CloudWatchClient {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchClient {
    pub fn new(client: aws_sdk_cloudwatch::Client) -> Self {
        Self { client }
    }
}

fn to_datum(record: &MetricRecord) -> Result<MetricDatum, Error> {
    let unit = match record.unit {
        Unit::Count => StandardUnit::Count,
    };

    let dimensions = record
        .dimensions
        .iter()
        .map(|dimension| {
            Dimension::builder()
                .name(&dimension.name)
                .value(&dimension.value)
                .build()
        })
        .collect::<Vec<_>>();

    Ok(MetricDatum::builder()
        .metric_name(&record.name)
        .unit(unit)
        .value(record.value)
        .timestamp(DateTime::from(record.timestamp))
        .set_dimensions(Some(dimensions))
        .build())
}

#[async_trait]
impl CloudWatchMetrics for CloudWatchClient {
    async fn put_metric_data(&self, namespace: &str, data: &[MetricRecord]) -> Result<(), Error> {
        let metric_data = data.iter().map(to_datum).collect::<Result<Vec<_>, _>>()?;

        self.client
            .put_metric_data()
            .namespace(namespace)
            .set_metric_data(Some(metric_data))
            .send()
            .await
            .map_err(|err| Error::Sink {
                source: Box::new(err),
            })?;

        Ok(())
    }
}
