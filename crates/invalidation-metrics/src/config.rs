// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::env;

use crate::constants::DEFAULT_NAMESPACE;
use crate::errors::Error;

/// Configuration for one metrics-collection run.
///
/// Built once at the rim (from the environment in the Lambda binary) and
/// passed in explicitly, so the core never reads ambient state.
#[derive(Debug, Clone)]
pub struct Config {
    /// CloudWatch namespace metrics are stored under.
    pub namespace: String,
    /// When enabled, all mutating sink calls are suppressed; the rest of
    /// the logic executes normally.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            dry_run: false,
        }
    }
}

impl Config {
    /// Create configuration from environment variables.
    ///
    /// `METRICS_NAMESPACE` overrides the namespace; a non-empty
    /// `METRICS_PUSH_DRYRUN` enables dry-run.
    pub fn from_env() -> Result<Self, Error> {
        let namespace =
            env::var("METRICS_NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string());
        let dry_run = env::var("METRICS_PUSH_DRYRUN")
            .map(|val| !val.trim().is_empty())
            .unwrap_or(false);

        let config = Self { namespace, dry_run };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), Error> {
        if self.namespace.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "metrics namespace cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
