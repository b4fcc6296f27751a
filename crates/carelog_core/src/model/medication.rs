//! Medication domain model.
//!
//! # Responsibility
//! - Define the medication record and its lifecycle status.
//!
//! # Invariants
//! - A medication is owned by one user and optionally scoped to one family
//!   member via a nullable foreign key.
//! - `id` and `createdAt` are assigned at create time and never change.

use serde::{Deserialize, Serialize};

/// Lifecycle status for a tracked medication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    /// Currently being taken.
    #[default]
    Active,
    /// Course finished as planned.
    Completed,
    /// Stopped before the planned end.
    Discontinued,
}

/// A medication tracked for the user or one of their family members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    /// Stable collection-unique id, assigned by the create handler.
    #[serde(default)]
    pub id: String,
    /// Identity that created the record.
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    /// Set when the medication belongs to a dependent rather than the
    /// account owner. Deleting the family member does NOT clear this.
    #[serde(default)]
    pub family_member_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub dosage: String,
    #[serde(default)]
    pub frequency: String,
    /// Clock times ("08:00") at which doses are scheduled.
    #[serde(default)]
    pub dose_times: Vec<String>,
    #[serde(default)]
    pub status: MedicationStatus,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub start_date: Option<i64>,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Medication {
    /// Creates an unsaved medication draft.
    ///
    /// The create handler assigns `id` and both timestamps; drafts carry
    /// placeholder values until then.
    pub fn new(owner_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            family_member_id: None,
            name: name.into(),
            dosage: String::new(),
            frequency: String::new(),
            dose_times: Vec::new(),
            status: MedicationStatus::Active,
            start_date: None,
            end_date: None,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == MedicationStatus::Active
    }
}
