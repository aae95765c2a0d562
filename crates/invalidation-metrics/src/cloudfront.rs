// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Capability trait for the content-delivery provider, plus the
//! provider-neutral read models the scanner consumes.

use std::time::SystemTime;

use async_trait::async_trait;

use crate::errors::Error;

/// A configured content-delivery endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionSummary {
    pub id: String,
    pub arn: String,
}

/// One entry from the distribution's invalidation listing, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationSummary {
    pub id: String,
    pub create_time: SystemTime,
}

/// Full detail for a single invalidation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationDetail {
    pub id: String,
    pub create_time: SystemTime,
    pub paths: Vec<String>,
}

impl InvalidationDetail {
    /// Number of paths purged by this invalidation.
    pub fn path_quantity(&self) -> u64 {
        self.paths.len() as u64
    }
}

/// A resource tag attached to a distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// Narrow view of the CloudFront API. One page of results per call, no
/// pagination. Implementations map their own failure types into [`Error`].
#[async_trait]
pub trait CloudFront: Send + Sync {
    async fn list_distributions(&self) -> Result<Vec<DistributionSummary>, Error>;

    /// Invalidations for a distribution, ordered newest first by the
    /// provider.
    async fn list_invalidations(
        &self,
        distribution_id: &str,
    ) -> Result<Vec<InvalidationSummary>, Error>;

    async fn get_invalidation(
        &self,
        distribution_id: &str,
        invalidation_id: &str,
    ) -> Result<InvalidationDetail, Error>;

    async fn list_tags_for_resource(&self, arn: &str) -> Result<Vec<Tag>, Error>;
}
