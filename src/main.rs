//! Alarm Notifier - CloudWatch database alarm relay
//!
//! Runs as an AWS Lambda function subscribed to the alarm SNS topic, or
//! locally to replay a captured event or list the watched alarm names.

use alarm_notifier::{
    cli::{Cli, Command},
    config::{Config, LogFormat},
    AlarmNotifier,
};
use anyhow::{Context, Result};
use clap::Parser;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use std::{path::Path, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration by layering sources: defaults, file, environment, and CLI args.
    let config = Config::load(&cli).unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {:#}", err);
        std::process::exit(1);
    });

    init_tracing(&config);

    let notifier = Arc::new(AlarmNotifier::from_config(&config));

    match cli.command.clone().unwrap_or_default() {
        Command::Lambda => {
            info!(
                environment = %config.environment,
                delivery_enabled = notifier.is_enabled(),
                "Alarm notifier starting under the Lambda runtime"
            );
            run_lambda(notifier).await
        }
        Command::Replay { event } => replay(&notifier, &event).await,
        Command::Watched => {
            for name in notifier.watched().names() {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

async fn run_lambda(notifier: Arc<AlarmNotifier>) -> Result<()> {
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let notifier = notifier.clone();
        async move {
            notifier.handle_event(event.payload).await.map_err(|e| {
                error!(error = %e, "Alarm batch failed");
                lambda_runtime::Error::from(e)
            })
        }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

async fn replay(notifier: &AlarmNotifier, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event file {}", path.display()))?;
    let event: Value = serde_json::from_str(&contents)
        .with_context(|| format!("Event file {} is not JSON", path.display()))?;

    info!(
        path = %path.display(),
        delivery_enabled = notifier.is_enabled(),
        "Replaying event file"
    );
    notifier
        .handle_event(event)
        .await
        .with_context(|| format!("Replay of {} failed", path.display()))?;
    info!("Replay finished.");
    Ok(())
}
