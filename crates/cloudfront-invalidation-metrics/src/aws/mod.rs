// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! AWS SDK adapters implementing the core's capability traits.

pub mod cloudfront;
pub mod cloudwatch;
pub mod cloudwatch_logs;
