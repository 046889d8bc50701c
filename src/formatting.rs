// src/formatting.rs

use crate::core::AlarmMessage;

/// A trait for rendering an alarm message into chat text.
pub trait TextFormatter: Send + Sync {
    fn format(&self, alarm: &AlarmMessage) -> String;
}

/// Slack formatter: a one-line recovery notice, or an alert with the full
/// alarm message dumped in a code block.
pub struct SlackTextFormatter;

impl SlackTextFormatter {
    fn format_recovery(&self, alarm: &AlarmMessage) -> String {
        format!(":white_check_mark: {} has recovered", alarm.alarm_name)
    }

    fn format_alert(&self, alarm: &AlarmMessage) -> String {
        format!(
            ":alert::alert::alert: {} state is now {}: {}\n```\n{:#}\n```",
            alarm.alarm_name,
            alarm.new_state_value,
            alarm.reason(),
            alarm.raw
        )
    }
}

impl TextFormatter for SlackTextFormatter {
    fn format(&self, alarm: &AlarmMessage) -> String {
        if alarm.is_recovery() {
            self.format_recovery(alarm)
        } else {
            self.format_alert(alarm)
        }
    }
}
