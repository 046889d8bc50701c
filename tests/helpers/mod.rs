#![allow(dead_code)]

pub mod mock_slack;

use alarm_notifier::{AlarmEventBatch, NotificationRecord};
use serde_json::json;

pub const WATCHED_CPU_ALARM: &str =
    "alarmStagingDatabaseServerCPUUtilization-districtbuilder-staging";
pub const WATCHED_STORAGE_ALARM: &str =
    "alarmStagingDatabaseServerFreeStorageSpace-districtbuilder-staging";
pub const UNRELATED_ALARM: &str = "alarmStagingAppServerCPUUtilization-districtbuilder-staging";

/// Builds a record carrying a CloudWatch alarm message with a few of the
/// extra fields CloudWatch sends.
pub fn alarm_record(name: &str, state: &str, reason: &str) -> NotificationRecord {
    let message = json!({
        "AlarmName": name,
        "AlarmDescription": null,
        "AWSAccountId": "123456789012",
        "NewStateValue": state,
        "NewStateReason": reason,
        "StateChangeTime": "2021-01-01T00:00:00.000+0000",
        "Region": "US East (N. Virginia)",
        "OldStateValue": "OK"
    });
    NotificationRecord::from_message(message.to_string())
}

pub fn batch(records: Vec<NotificationRecord>) -> AlarmEventBatch {
    AlarmEventBatch::from(records)
}

/// Serializes a batch the way SNS delivers it to the function.
pub fn sns_event_json(records: Vec<NotificationRecord>) -> String {
    serde_json::to_string(&batch(records)).unwrap()
}
