//! Command-Line Interface (CLI) argument parsing.
//!
//! This module defines the command-line arguments for the application using the
//! `clap` crate. Flags given here are merged on top of the TOML file and the
//! environment variables when the configuration is loaded.

use clap::{Parser, Subcommand};
use figment::{
    value::{Dict, Map, Value},
    Error, Metadata, Profile, Provider,
};
use std::path::PathBuf;

/// Forwards CloudWatch database alarms from SNS to a Slack webhook.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Environment name used to build the watched alarm names.
    #[arg(long, value_name = "NAME")]
    pub environment: Option<String>,

    /// Slack incoming webhook URL.
    #[arg(long, value_name = "URL")]
    pub webhook_url: Option<String>,

    /// Default log filter (overridden by RUST_LOG).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Run under the AWS Lambda runtime (default).
    #[default]
    Lambda,
    /// Run the handler once on an SNS event read from a JSON file.
    Replay {
        /// Path to the event file.
        #[arg(value_name = "FILE")]
        event: PathBuf,
    },
    /// Print the watched alarm names.
    Watched,
}

impl Provider for Cli {
    fn metadata(&self) -> Metadata {
        Metadata::named("Command-Line Arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();

        if let Some(environment) = &self.environment {
            dict.insert("environment".into(), Value::from(environment.clone()));
        }

        if let Some(url) = &self.webhook_url {
            dict.insert("slack_bot_webhook".into(), Value::from(url.clone()));
        }

        if let Some(level) = &self.log_level {
            dict.insert("log_level".into(), Value::from(level.clone()));
        }

        let mut map = Map::new();
        map.insert(Profile::Default, dict);
        Ok(map)
    }
}
