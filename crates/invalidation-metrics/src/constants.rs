// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

/// Maximum number of metric records CloudWatch accepts in a single
/// `PutMetricData` payload. Anything larger is rejected by the API.
pub const AWS_PAYLOAD_LIMIT: usize = 20;

/// Invalidations older than this relative to the run's reference time are
/// not counted. Matches the job's five-minute schedule.
pub const TIME_WINDOW: Duration = Duration::from_secs(5 * 60);

/// CloudWatch namespace metrics are stored under when none is configured.
pub const DEFAULT_NAMESPACE: &str = "Skpr/CloudFront";

/// Metric counting invalidation requests within the time window.
pub const METRIC_INVALIDATION_REQUEST: &str = "InvalidationRequest";

/// Metric counting invalidated paths within the time window.
pub const METRIC_INVALIDATION_PATHS: &str = "InvalidationPathCounter";

/// Dimension name carrying the distribution identifier.
pub const DIMENSION_DISTRIBUTION: &str = "Distribution";

/// Distribution tag designating the CloudWatch Logs group to write
/// invalidation detail to.
pub const TAG_LOG_GROUP: &str = "skpr.io/log-group";

/// Distribution tag designating the CloudWatch Logs stream to write
/// invalidation detail to.
pub const TAG_LOG_STREAM: &str = "skpr.io/log-stream";
