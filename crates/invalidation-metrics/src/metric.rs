// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::SystemTime;

/// Unit attached to a metric record. The job only emits counters today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Count,
}

/// A single name/value pair qualifying a metric record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dimension {
    pub name: String,
    pub value: String,
}

impl Dimension {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One data point destined for the metrics sink.
///
/// Records are immutable once constructed: the scanner builds them, the
/// queue owns them until a flush hands them to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub name: String,
    pub unit: Unit,
    pub value: f64,
    pub timestamp: SystemTime,
    pub dimensions: Vec<Dimension>,
}

impl MetricRecord {
    /// Build a counter record.
    pub fn count(
        name: impl Into<String>,
        value: f64,
        timestamp: SystemTime,
        dimensions: Vec<Dimension>,
    ) -> Self {
        Self {
            name: name.into(),
            unit: Unit::Count,
            value,
            timestamp,
            dimensions,
        }
    }
}
