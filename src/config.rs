//! Configuration management for the alarm notifier
//!
//! This module defines the `Config` struct holding all runtime settings. It
//! uses the `figment` crate to layer built-in defaults, an optional TOML file,
//! the deployment's environment variables, prefixed overrides, and finally
//! command-line arguments.

use crate::cli::Cli;
use anyhow::{bail, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// The main configuration struct for the application.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Environment name (e.g. `Staging`), embedded in the watched alarm names.
    pub environment: String,
    /// The Slack incoming webhook URL. Delivery is disabled when unset or empty.
    #[serde(default)]
    pub slack_bot_webhook: Option<String>,
    /// The default log filter, used when `RUST_LOG` is not set.
    pub log_level: String,
    /// The log output format.
    pub log_format: LogFormat,
    /// Timeout for a single webhook request, in seconds.
    pub request_timeout_seconds: u64,
}

/// Log output format.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Text,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::Text => write!(f, "text"),
        }
    }
}

impl Config {
    /// Loads the configuration, letting each source override the previous one.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(path) = &cli.config {
            if !path.exists() {
                bail!("Config file not found at specified path: {}", path.display());
            }
            figment = figment.merge(Toml::file(path));
        }

        let config: Config = figment
            // The names the deployment sets on the function.
            .merge(Env::raw().only(&["ENVIRONMENT", "SLACK_BOT_WEBHOOK"]))
            // e.g., ALARM_NOTIFIER_LOG_LEVEL=debug
            .merge(Env::prefixed("ALARM_NOTIFIER_"))
            .merge(cli.clone())
            .extract()?;
        Ok(config)
    }

    /// The webhook to deliver to, or `None` when delivery is disabled.
    pub fn webhook_url(&self) -> Option<&str> {
        self.slack_bot_webhook
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "Staging".to_string(),
            slack_bot_webhook: None,
            log_level: "info".to_string(),
            log_format: LogFormat::Json,
            request_timeout_seconds: 10,
        }
    }
}
