//! Prescription domain model.
//!
//! # Invariants
//! - The owner reference serializes as `patientId`, not `userId` — the one
//!   collection that inherited a different owner wire name from the source
//!   data. See `EntityKind::owner_field`.

use serde::{Deserialize, Serialize};

/// A prescription as written by a doctor; diagnosis and medication are free
/// text, not foreign keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "patientId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default)]
    pub diagnosis: String,
    pub medication: String,
    #[serde(default)]
    pub dosage: String,
    /// Course duration as written ("7 days", "until review").
    #[serde(default)]
    pub duration: String,
    /// Date prescribed, Unix epoch milliseconds.
    #[serde(default)]
    pub prescribed_at: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl Prescription {
    pub fn new(owner_id: impl Into<String>, medication: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            doctor_name: String::new(),
            diagnosis: String::new(),
            medication: medication.into(),
            dosage: String::new(),
            duration: String::new(),
            prescribed_at: 0,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}
