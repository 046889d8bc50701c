//! The set of alarm names the notifier forwards.
//!
//! Names follow the deployment's naming convention for the database server
//! alarms: `alarm{Environment}DatabaseServer{Metric}-districtbuilder-{environment}`.

/// Application segment embedded in every watched alarm name.
pub const APP_NAME: &str = "districtbuilder";
/// Server segment embedded in every watched alarm name.
pub const SERVER_NAME: &str = "DatabaseServer";
/// Database metrics with a provisioned alarm.
pub const WATCHED_METRICS: [&str; 4] = [
    "CPUUtilization",
    "DiskQueueDepth",
    "FreeableMemory",
    "FreeStorageSpace",
];

/// Immutable list of watched alarm names for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedAlarms {
    names: Vec<String>,
}

impl WatchedAlarms {
    /// Builds the watched names for `environment` (e.g. `Staging`).
    pub fn for_environment(environment: &str) -> Self {
        let lower = environment.to_lowercase();
        let names = WATCHED_METRICS
            .iter()
            .map(|metric| {
                format!(
                    "alarm{}{}{}-{}-{}",
                    environment, SERVER_NAME, metric, APP_NAME, lower
                )
            })
            .collect();
        Self { names }
    }

    pub fn contains(&self, alarm_name: &str) -> bool {
        self.names.iter().any(|name| name == alarm_name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
