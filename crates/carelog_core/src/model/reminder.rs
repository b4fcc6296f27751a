//! Self reminder domain model.
//!
//! # Invariants
//! - The `active` toggle is independent of the schedule: deactivating a
//!   reminder never rewrites its schedule.

use serde::{Deserialize, Serialize};

/// How often a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReminderFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

/// When a reminder fires: frequency plus clock times, with an optional
/// day-of-week restriction for weekly schedules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSchedule {
    #[serde(default)]
    pub frequency: ReminderFrequency,
    /// Clock times ("08:00").
    #[serde(default)]
    pub times: Vec<String>,
    /// Days of week ("monday", ...); `None` means every applicable day.
    #[serde(default)]
    pub days_of_week: Option<Vec<String>>,
}

/// A user-authored reminder, independent of medications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfReminder {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub schedule: ReminderSchedule,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl SelfReminder {
    pub fn new(owner_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            title: title.into(),
            schedule: ReminderSchedule::default(),
            active: true,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}
