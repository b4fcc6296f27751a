//! Appointment domain model.

use serde::{Deserialize, Serialize};

/// A scheduled visit with a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub family_member_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub location: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub scheduled_at: i64,
    /// Free-text state ("upcoming", "completed", "cancelled").
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Appointment {
    pub fn new(owner_id: impl Into<String>, title: impl Into<String>, scheduled_at: i64) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            family_member_id: None,
            title: title.into(),
            doctor_name: String::new(),
            location: String::new(),
            scheduled_at,
            status: String::from("upcoming"),
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}
