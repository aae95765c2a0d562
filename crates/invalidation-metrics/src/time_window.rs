// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::SystemTime;

use crate::constants::TIME_WINDOW;

/// Returns true when `event_time` falls within the acceptance window,
/// i.e. `event_time >= reference_time - 5m`.
///
/// The reference time is an explicit argument so the filter stays pure;
/// callers capture it once per run.
pub fn is_time_range_acceptable(reference_time: SystemTime, event_time: SystemTime) -> bool {
    match reference_time.checked_sub(TIME_WINDOW) {
        Some(boundary) => event_time >= boundary,
        // Reference time earlier than the epoch window, everything qualifies.
        None => true,
    }
}
