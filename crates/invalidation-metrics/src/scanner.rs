// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Per-distribution invalidation scan.
//!
//! Walks a distribution's invalidation listing newest first, counts the
//! requests and purged paths that fall within the acceptance window, and
//! turns the tallies into metric records.

use std::time::SystemTime;

use tracing::debug;

use crate::cloudfront::{CloudFront, DistributionSummary};
use crate::constants::{
    DIMENSION_DISTRIBUTION, METRIC_INVALIDATION_PATHS, METRIC_INVALIDATION_REQUEST,
};
use crate::errors::Error;
use crate::metric::{Dimension, MetricRecord};
use crate::time_window::is_time_range_acceptable;

/// Invalidation activity observed for one distribution within the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationActivity {
    pub distribution_id: String,
    /// Invalidation requests created within the window.
    pub requests: u64,
    /// Paths purged by those requests.
    pub paths: u64,
    /// The purged paths themselves, for the optional log line.
    pub invalidated_paths: Vec<String>,
}

impl InvalidationActivity {
    /// The two metric records reported for this distribution.
    pub fn metric_records(&self, timestamp: SystemTime) -> [MetricRecord; 2] {
        let dimensions = vec![Dimension::new(
            DIMENSION_DISTRIBUTION,
            self.distribution_id.clone(),
        )];

        [
            MetricRecord::count(
                METRIC_INVALIDATION_REQUEST,
                self.requests as f64,
                timestamp,
                dimensions.clone(),
            ),
            MetricRecord::count(
                METRIC_INVALIDATION_PATHS,
                self.paths as f64,
                timestamp,
                dimensions,
            ),
        ]
    }
}

/// Tally recent invalidation activity for a single distribution.
///
/// The provider returns invalidations newest first, so the first entry
/// outside the window ends the walk; everything after it is older still.
/// Detail is only fetched for entries that qualify.
pub async fn scan_distribution(
    cloudfront: &dyn CloudFront,
    reference_time: SystemTime,
    distribution: &DistributionSummary,
) -> Result<InvalidationActivity, Error> {
    let invalidations = cloudfront.list_invalidations(&distribution.id).await?;

    let mut activity = InvalidationActivity {
        distribution_id: distribution.id.clone(),
        requests: 0,
        paths: 0,
        invalidated_paths: Vec::new(),
    };

    for invalidation in &invalidations {
        if !is_time_range_acceptable(reference_time, invalidation.create_time) {
            break;
        }

        let detail = cloudfront
            .get_invalidation(&distribution.id, &invalidation.id)
            .await?;

        activity.requests += 1;
        activity.paths += detail.path_quantity();
        activity.invalidated_paths.extend(detail.paths);
    }

    debug!(
        distribution = %distribution.id,
        requests = activity.requests,
        paths = activity.paths,
        "scanned distribution"
    );

    Ok(activity)
}
