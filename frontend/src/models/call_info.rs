//! Meeting details shown in the control bar.

use chrono::{Local, NaiveTime};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallInfo {
    pub user_name: String,
    pub meeting_code: String,
}

impl CallInfo {
    pub fn new(user_name: impl Into<String>, meeting_code: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            meeting_code: meeting_code.into(),
        }
    }

    /// `10:34 AM | zfw-fayf-eeo`
    pub fn summary_at(&self, time: NaiveTime) -> String {
        format!("{} | {}", clock_label(time), self.meeting_code)
    }

    pub fn summary_now(&self) -> String {
        self.summary_at(Local::now().time())
    }
}

/// Two-digit 12-hour clock with AM/PM.
pub fn clock_label(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
