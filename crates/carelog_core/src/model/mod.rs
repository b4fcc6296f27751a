//! Typed domain models for the carelog entity store.
//!
//! # Responsibility
//! - Define the canonical record shape for every entity collection.
//! - Map each collection to its persisted key and owner wire field.
//!
//! # Invariants
//! - Every entity carries a string `id` unique within its collection, an
//!   owner reference and epoch-millisecond `createdAt`/`updatedAt` fields.
//! - An entity belongs to exactly one collection, determined by its type,
//!   for its entire lifetime.
//! - Wire names are camelCase; readers tolerate records that predate newer
//!   optional fields.

pub mod appointment;
pub mod dose;
pub mod family;
pub mod insight;
pub mod insurance;
pub mod medication;
pub mod metric;
pub mod prescription;
pub mod reminder;
pub mod report;

/// Identifies one entity collection.
///
/// This is the route table's backbone: every dispatchable collection is a
/// variant here, so handler coverage is checked by the compiler instead of
/// string comparisons at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityKind {
    Medications,
    DoseRecords,
    FamilyMembers,
    HealthReports,
    Prescriptions,
    Appointments,
    HealthMetrics,
    DiseaseAnalyses,
    HealthTrends,
    InsurancePolicies,
    AiInsights,
    SelfReminders,
}

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Medications,
        EntityKind::DoseRecords,
        EntityKind::FamilyMembers,
        EntityKind::HealthReports,
        EntityKind::Prescriptions,
        EntityKind::Appointments,
        EntityKind::HealthMetrics,
        EntityKind::DiseaseAnalyses,
        EntityKind::HealthTrends,
        EntityKind::InsurancePolicies,
        EntityKind::AiInsights,
        EntityKind::SelfReminders,
    ];

    /// Returns the persisted backing-store key for this collection.
    pub fn collection_key(self) -> &'static str {
        match self {
            Self::Medications => "medications",
            Self::DoseRecords => "doseRecords",
            Self::FamilyMembers => "familyMembers",
            Self::HealthReports => "healthReports",
            Self::Prescriptions => "prescriptions",
            Self::Appointments => "appointments",
            Self::HealthMetrics => "healthMetrics",
            Self::DiseaseAnalyses => "diseaseAnalyses",
            Self::HealthTrends => "healthTrends",
            Self::InsurancePolicies => "insurancePolicies",
            Self::AiInsights => "aiInsights",
            Self::SelfReminders => "selfReminders",
        }
    }

    /// Returns the wire name of the owner reference field.
    ///
    /// Every collection stores its owner under `userId` except
    /// prescriptions, which inherited `patientId` from the source data.
    /// This mapping is the only place that inconsistency surfaces; the
    /// ownership filter takes the field name as data.
    pub fn owner_field(self) -> &'static str {
        match self {
            Self::Prescriptions => "patientId",
            _ => "userId",
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::EntityKind;
    use std::collections::BTreeSet;

    #[test]
    fn collection_keys_are_unique() {
        let keys: BTreeSet<_> = EntityKind::ALL
            .iter()
            .map(|kind| kind.collection_key())
            .collect();
        assert_eq!(keys.len(), EntityKind::ALL.len());
    }

    #[test]
    fn only_prescriptions_use_patient_id() {
        for kind in EntityKind::ALL {
            let expected = if kind == EntityKind::Prescriptions {
                "patientId"
            } else {
                "userId"
            };
            assert_eq!(kind.owner_field(), expected);
        }
    }
}
