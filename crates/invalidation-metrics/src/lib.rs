// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Core for the CloudFront invalidation metrics job.
//!
//! Everything network-facing is behind a narrow capability trait
//! ([`cloudfront::CloudFront`], [`cloudwatch::CloudWatchMetrics`],
//! [`cloudwatch_logs::CloudWatchLogs`]) so the scanner, queue and runner
//! carry no dependency on any cloud SDK. The binary crate supplies the
//! SDK-backed implementations.

pub mod cloudfront;
pub mod cloudwatch;
pub mod cloudwatch_logs;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logs;
pub mod metric;
pub mod queue;
pub mod runner;
pub mod scanner;
pub mod time_window;
