//! Dose record domain model.
//!
//! # Responsibility
//! - Define the per-dose tracking record and its status state machine.
//!
//! # Invariants
//! - `pending` is the only non-terminal status; `taken`, `missed` and
//!   `skipped` are terminal.
//! - The store layer does not enforce transitions — callers validate with
//!   `DoseStatus::can_transition_to` before sending an update.

use serde::{Deserialize, Serialize};

/// Status state machine for one scheduled dose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DoseStatus {
    #[default]
    Pending,
    Taken,
    Missed,
    Skipped,
}

impl DoseStatus {
    /// Terminal statuses cannot transition anywhere.
    pub fn is_terminal(self) -> bool {
        self != Self::Pending
    }

    /// Returns whether `self -> next` is a legal transition.
    pub fn can_transition_to(self, next: Self) -> bool {
        self == Self::Pending && next != Self::Pending
    }
}

/// One scheduled dose of a medication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    /// Id of the medication this dose belongs to.
    #[serde(default)]
    pub medication_id: String,
    /// Denormalized medication name for display without a join.
    #[serde(default)]
    pub medication_name: String,
    /// When the dose was scheduled, Unix epoch milliseconds.
    #[serde(default)]
    pub scheduled_at: i64,
    /// When the dose was actually taken; only meaningful for `taken`.
    #[serde(default)]
    pub taken_at: Option<i64>,
    #[serde(default)]
    pub status: DoseStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl DoseRecord {
    /// Creates an unsaved pending dose draft for a medication.
    pub fn new(
        owner_id: impl Into<String>,
        medication_id: impl Into<String>,
        medication_name: impl Into<String>,
        scheduled_at: i64,
    ) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            medication_id: medication_id.into(),
            medication_name: medication_name.into(),
            scheduled_at,
            taken_at: None,
            status: DoseStatus::Pending,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DoseStatus;

    #[test]
    fn pending_reaches_every_terminal_status() {
        for next in [DoseStatus::Taken, DoseStatus::Missed, DoseStatus::Skipped] {
            assert!(DoseStatus::Pending.can_transition_to(next));
        }
    }

    #[test]
    fn terminal_statuses_do_not_transition() {
        for terminal in [DoseStatus::Taken, DoseStatus::Missed, DoseStatus::Skipped] {
            assert!(terminal.is_terminal());
            for next in [
                DoseStatus::Pending,
                DoseStatus::Taken,
                DoseStatus::Missed,
                DoseStatus::Skipped,
            ] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn pending_cannot_loop_to_pending() {
        assert!(!DoseStatus::Pending.can_transition_to(DoseStatus::Pending));
    }
}
