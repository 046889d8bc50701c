//! Alarm Notifier - relays CloudWatch database alarms to Slack
//!
//! This library receives SNS-delivered alarm state changes, keeps the ones
//! that concern the database server's health metrics, and posts a formatted
//! message to a Slack incoming webhook.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod formatting;
pub mod handler;
pub mod notification;
pub mod watchlist;

// Re-export core types for convenience
pub use crate::core::*;
pub use error::NotifierError;
pub use handler::AlarmNotifier;
