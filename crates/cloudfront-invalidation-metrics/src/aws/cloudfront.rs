// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::SystemTime;

use async_trait::async_trait;

use invalidation_metrics::cloudfront::{
    CloudFront, DistributionSummary, InvalidationDetail, InvalidationSummary, Tag,
};
use invalidation_metrics::errors::Error;

/// CloudFront-backed implementation of the provider trait.
pub struct CloudFrontClient {
    client: aws_sdk_cloudfront::Client,
}

impl CloudFrontClient {
    pub fn new(client: aws_sdk_cloudfront::Client) -> Self {
        Self { client }
    }
}

fn to_system_time(value: aws_sdk_cloudfront::primitives::DateTime) -> Result<SystemTime, Error> {
    SystemTime::try_from(value).map_err(|err| Error::TimeParse {
        source: Box::new(err),
    })
}

#[async_trait]
impl CloudFront for CloudFrontClient {
    async fn list_distributions(&self) -> Result<Vec<DistributionSummary>, Error> {
        let output = self
            .client
            .list_distributions()
            .send()
            .await
            .map_err(|err| Error::UpstreamList {
                resource: "distributions",
                source: Box::new(err),
            })?;

        let mut distributions = Vec::new();
        if let Some(list) = output.distribution_list() {
            for item in list.items() {
                distributions.push(DistributionSummary {
                    id: item.id().to_string(),
                    arn: item.arn().to_string(),
                });
            }
        }

        Ok(distributions)
    }

    async fn list_invalidations(
        &self,
        distribution_id: &str,
    ) -> Result<Vec<InvalidationSummary>, Error> {
        let output = self
            .client
            .list_invalidations()
            .distribution_id(distribution_id)
            .send()
            .await
            .map_err(|err| Error::UpstreamList {
                resource: "invalidations",
                source: Box::new(err),
            })?;

        let mut invalidations = Vec::new();
        if let Some(list) = output.invalidation_list() {
            for item in list.items() {
                invalidations.push(InvalidationSummary {
                    id: item.id().to_string(),
                    create_time: to_system_time(*item.create_time())?,
                });
            }
        }

        Ok(invalidations)
    }

    async fn get_invalidation(
        &self,
        distribution_id: &str,
        invalidation_id: &str,
    ) -> Result<InvalidationDetail, Error> {
        let output = self
            .client
            .get_invalidation()
            .distribution_id(distribution_id)
            .id(invalidation_id)
            .send()
            .await
            .map_err(|err| Error::UpstreamDetail {
                id: invalidation_id.to_string(),
                source: Box::new(err),
            })?;

        let invalidation = output.invalidation().ok_or_else(|| Error::UpstreamDetail {
            id: invalidation_id.to_string(),
            source: "missing invalidation in response".into(),
        })?;

        let paths = invalidation
            .invalidation_batch()
            .and_then(|batch| batch.paths())
            .map(|paths| paths.items().to_vec())
            .unwrap_or_default();

        Ok(InvalidationDetail {
            id: invalidation.id().to_string(),
            create_time: to_system_time(*invalidation.create_time())?,
            paths,
        })
    }

    async fn list_tags_for_resource(&self, arn: &str) -> Result<Vec<Tag>, Error> {
        let output = self
            .client
            .list_tags_for_resource()
            .resource(arn)
            .send()
            .await
            .map_err(|err| Error::TagResolution {
                arn: arn.to_string(),
                source: Box::new(err),
            })?;

        let mut tags = Vec::new();
        if let Some(list) = output.tags() {
            for tag in list.items() {
                tags.push(Tag {
                    key: tag.key().to_string(),
                    value: tag.value().unwrap_or_default().to_string(),
                });
            }
        }

        Ok(tags)
    }
}
