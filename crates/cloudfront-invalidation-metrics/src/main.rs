// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::todo))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

mod aws;

use std::env;
use std::sync::Arc;

use lambda_runtime::{run, service_fn, LambdaEvent};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use invalidation_metrics::config::Config;
use invalidation_metrics::runner::Runner;

use crate::aws::cloudfront::CloudFrontClient;
use crate::aws::cloudwatch::CloudWatchClient;
use crate::aws::cloudwatch_logs::CloudWatchLogsClient;

#[tokio::main]
pub async fn main() -> Result<(), lambda_runtime::Error> {
    let log_level = env::var("LOG_LEVEL")
        .map(|val| val.to_lowercase())
        .unwrap_or("info".to_string());

    let env_filter = format!("hyper=off,rustls=off,{}", log_level);

    #[allow(clippy::expect_used)]
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_new(env_filter).expect("could not parse log level in configuration"),
        )
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .without_time()
        .finish();

    #[allow(clippy::expect_used)]
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    debug!("Logging subsystem enabled");

    run(service_fn(handler)).await
}

async fn handler(_event: LambdaEvent<serde_json::Value>) -> Result<(), lambda_runtime::Error> {
    let config = Config::from_env()?;

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

    let cloudfront = Arc::new(CloudFrontClient::new(aws_sdk_cloudfront::Client::new(
        &sdk_config,
    )));
    let cloudwatch = Arc::new(CloudWatchClient::new(aws_sdk_cloudwatch::Client::new(
        &sdk_config,
    )));
    let cloudwatch_logs = Arc::new(CloudWatchLogsClient::new(
        aws_sdk_cloudwatchlogs::Client::new(&sdk_config),
    ));

    let mut runner = Runner::new(cloudfront, cloudwatch, cloudwatch_logs, &config);

    if let Err(err) = runner.run().await {
        error!("run failed: {err}");
        return Err(err.into());
    }

    Ok(())
}
