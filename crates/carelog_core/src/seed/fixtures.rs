//! Canonical demo fixtures.
//!
//! All data in this module is hardcoded and fictional; it stands in for a
//! real account's records so demo sessions have something to browse.
//!
//! # Invariants
//! - Factories are pure: fixed ids, the fixed seed clock, no randomness —
//!   two invocations produce identical records.
//! - Every fixture is owned by `DEMO_OWNER_ID`, which carries the reserved
//!   demo prefix, making fixtures visible to every demo session.

use crate::model::appointment::Appointment;
use crate::model::dose::{DoseRecord, DoseStatus};
use crate::model::family::FamilyMember;
use crate::model::insight::{AiInsight, DiseaseAnalysis, InsightSeverity};
use crate::model::insurance::{
    CoPayment, CoveragePeriod, Deductible, InsuranceClaim, InsuranceDocument, InsurancePolicy,
    PolicyContact, PolicyStatus,
};
use crate::model::medication::{Medication, MedicationStatus};
use crate::model::metric::{HealthMetric, HealthTrend, TrendDirection};
use crate::model::prescription::Prescription;
use crate::model::reminder::{ReminderFrequency, ReminderSchedule, SelfReminder};
use crate::model::report::{HealthReport, ParameterStatus, ReportAnalysis, ReportParameter};
use crate::model::EntityKind;
use serde::Serialize;
use serde_json::Value;

/// Owner identity for every seeded fixture.
pub const DEMO_OWNER_ID: &str = "demo-user";

/// Seed clock: 2026-01-15T08:00:00Z, Unix epoch milliseconds.
pub const SEED_CLOCK_MS: i64 = 1_768_464_000_000;

const DAY_MS: i64 = 86_400_000;

/// Returns the canonical fixture list for one collection.
pub fn canonical_fixtures(kind: EntityKind) -> Vec<Value> {
    match kind {
        EntityKind::Medications => records(&medications()),
        EntityKind::DoseRecords => records(&dose_records()),
        EntityKind::FamilyMembers => records(&family_members()),
        EntityKind::HealthReports => records(&health_reports()),
        EntityKind::Prescriptions => records(&prescriptions()),
        EntityKind::Appointments => records(&appointments()),
        EntityKind::HealthMetrics => records(&health_metrics()),
        EntityKind::DiseaseAnalyses => records(&disease_analyses()),
        EntityKind::HealthTrends => records(&health_trends()),
        EntityKind::InsurancePolicies => records(&insurance_policies()),
        EntityKind::AiInsights => records(&insights()),
        EntityKind::SelfReminders => records(&reminders()),
    }
}

fn records<T: Serialize>(entities: &[T]) -> Vec<Value> {
    entities
        .iter()
        .map(|entity| serde_json::to_value(entity).expect("fixture record serializes"))
        .collect()
}

fn medications() -> Vec<Medication> {
    let mut metformin = Medication::new(DEMO_OWNER_ID, "Metformin");
    metformin.id = "demo-med-001".into();
    metformin.dosage = "500 mg".into();
    metformin.frequency = "twice daily".into();
    metformin.dose_times = vec!["08:00".into(), "20:00".into()];
    metformin.start_date = Some(SEED_CLOCK_MS - 90 * DAY_MS);
    metformin.notes = Some("Take with food.".into());
    metformin.created_at = SEED_CLOCK_MS;
    metformin.updated_at = SEED_CLOCK_MS;

    let mut lisinopril = Medication::new(DEMO_OWNER_ID, "Lisinopril");
    lisinopril.id = "demo-med-002".into();
    lisinopril.dosage = "10 mg".into();
    lisinopril.frequency = "once daily".into();
    lisinopril.dose_times = vec!["08:00".into()];
    lisinopril.start_date = Some(SEED_CLOCK_MS - 120 * DAY_MS);
    lisinopril.created_at = SEED_CLOCK_MS;
    lisinopril.updated_at = SEED_CLOCK_MS;

    let mut amoxicillin = Medication::new(DEMO_OWNER_ID, "Amoxicillin");
    amoxicillin.id = "demo-med-003".into();
    amoxicillin.family_member_id = Some("demo-fam-002".into());
    amoxicillin.dosage = "250 mg".into();
    amoxicillin.frequency = "three times daily".into();
    amoxicillin.dose_times = vec!["08:00".into(), "14:00".into(), "20:00".into()];
    amoxicillin.status = MedicationStatus::Completed;
    amoxicillin.start_date = Some(SEED_CLOCK_MS - 21 * DAY_MS);
    amoxicillin.end_date = Some(SEED_CLOCK_MS - 14 * DAY_MS);
    amoxicillin.created_at = SEED_CLOCK_MS;
    amoxicillin.updated_at = SEED_CLOCK_MS;

    vec![metformin, lisinopril, amoxicillin]
}

fn dose_records() -> Vec<DoseRecord> {
    let mut taken = DoseRecord::new(
        DEMO_OWNER_ID,
        "demo-med-001",
        "Metformin",
        SEED_CLOCK_MS - DAY_MS,
    );
    taken.id = "demo-dose-001".into();
    taken.status = DoseStatus::Taken;
    taken.taken_at = Some(SEED_CLOCK_MS - DAY_MS + 600_000);
    taken.created_at = SEED_CLOCK_MS;
    taken.updated_at = SEED_CLOCK_MS;

    let mut missed = DoseRecord::new(
        DEMO_OWNER_ID,
        "demo-med-002",
        "Lisinopril",
        SEED_CLOCK_MS - DAY_MS,
    );
    missed.id = "demo-dose-002".into();
    missed.status = DoseStatus::Missed;
    missed.created_at = SEED_CLOCK_MS;
    missed.updated_at = SEED_CLOCK_MS;

    let mut pending = DoseRecord::new(DEMO_OWNER_ID, "demo-med-001", "Metformin", SEED_CLOCK_MS);
    pending.id = "demo-dose-003".into();
    pending.created_at = SEED_CLOCK_MS;
    pending.updated_at = SEED_CLOCK_MS;

    vec![taken, missed, pending]
}

fn family_members() -> Vec<FamilyMember> {
    let mut spouse = FamilyMember::new(DEMO_OWNER_ID, "Maya Okafor", "spouse");
    spouse.id = "demo-fam-001".into();
    spouse.date_of_birth = Some(429_235_200_000); // 1983-08-09
    spouse.gender = Some("female".into());
    spouse.blood_type = Some("O+".into());
    spouse.created_at = SEED_CLOCK_MS;
    spouse.updated_at = SEED_CLOCK_MS;

    let mut child = FamilyMember::new(DEMO_OWNER_ID, "Tobi Okafor", "child");
    child.id = "demo-fam-002".into();
    child.date_of_birth = Some(1_432_857_600_000); // 2015-05-29
    child.gender = Some("male".into());
    child.allergies = vec!["penicillin".into()];
    child.created_at = SEED_CLOCK_MS;
    child.updated_at = SEED_CLOCK_MS;

    vec![spouse, child]
}

fn health_reports() -> Vec<HealthReport> {
    let parameters = vec![
        ReportParameter {
            name: "Hemoglobin".into(),
            value: "10.2".into(),
            unit: "g/dL".into(),
            reference_range: "13.5-17.5".into(),
            status: ParameterStatus::Low,
        },
        ReportParameter {
            name: "Fasting glucose".into(),
            value: "108".into(),
            unit: "mg/dL".into(),
            reference_range: "70-100".into(),
            status: ParameterStatus::Borderline,
        },
        ReportParameter {
            name: "Platelets".into(),
            value: "240".into(),
            unit: "10^9/L".into(),
            reference_range: "150-400".into(),
            status: ParameterStatus::Normal,
        },
        ReportParameter {
            name: "Creatinine".into(),
            value: "0.9".into(),
            unit: "mg/dL".into(),
            reference_range: "0.7-1.3".into(),
            status: ParameterStatus::Normal,
        },
    ];

    let mut report = HealthReport::new(
        DEMO_OWNER_ID,
        "Annual blood panel",
        SEED_CLOCK_MS - 10 * DAY_MS,
    );
    report.id = "demo-rep-001".into();
    report.report_type = "lab".into();
    report.file_name = Some("blood_panel_jan.pdf".into());
    report.analysis = Some(ReportAnalysis::from_parameters(parameters));
    report.created_at = SEED_CLOCK_MS;
    report.updated_at = SEED_CLOCK_MS;

    vec![report]
}

fn prescriptions() -> Vec<Prescription> {
    let mut iron = Prescription::new(DEMO_OWNER_ID, "Ferrous sulfate");
    iron.id = "demo-rx-001".into();
    iron.doctor_name = "Dr. A. Rivera".into();
    iron.diagnosis = "Iron deficiency anemia".into();
    iron.dosage = "325 mg once daily".into();
    iron.duration = "8 weeks".into();
    iron.prescribed_at = SEED_CLOCK_MS - 9 * DAY_MS;
    iron.notes = Some("Recheck CBC in four weeks.".into());
    iron.created_at = SEED_CLOCK_MS;
    iron.updated_at = SEED_CLOCK_MS;

    let mut amoxicillin = Prescription::new(DEMO_OWNER_ID, "Amoxicillin");
    amoxicillin.id = "demo-rx-002".into();
    amoxicillin.doctor_name = "Dr. S. Chen".into();
    amoxicillin.diagnosis = "Acute sinusitis".into();
    amoxicillin.dosage = "250 mg three times daily".into();
    amoxicillin.duration = "7 days".into();
    amoxicillin.prescribed_at = SEED_CLOCK_MS - 21 * DAY_MS;
    amoxicillin.created_at = SEED_CLOCK_MS;
    amoxicillin.updated_at = SEED_CLOCK_MS;

    vec![iron, amoxicillin]
}

fn appointments() -> Vec<Appointment> {
    let mut follow_up = Appointment::new(
        DEMO_OWNER_ID,
        "Anemia follow-up",
        SEED_CLOCK_MS + 18 * DAY_MS,
    );
    follow_up.id = "demo-appt-001".into();
    follow_up.doctor_name = "Dr. A. Rivera".into();
    follow_up.location = "Internal Medicine, Room 204".into();
    follow_up.created_at = SEED_CLOCK_MS;
    follow_up.updated_at = SEED_CLOCK_MS;

    let mut dental = Appointment::new(
        DEMO_OWNER_ID,
        "Dental cleaning",
        SEED_CLOCK_MS + 32 * DAY_MS,
    );
    dental.id = "demo-appt-002".into();
    dental.family_member_id = Some("demo-fam-002".into());
    dental.doctor_name = "Dr. L. Hart".into();
    dental.location = "Smile Dental Clinic".into();
    dental.created_at = SEED_CLOCK_MS;
    dental.updated_at = SEED_CLOCK_MS;

    vec![follow_up, dental]
}

fn health_metrics() -> Vec<HealthMetric> {
    let mut blood_pressure = HealthMetric::new(
        DEMO_OWNER_ID,
        "blood_pressure",
        "138/88",
        SEED_CLOCK_MS - 2 * DAY_MS,
    );
    blood_pressure.id = "demo-metric-001".into();
    blood_pressure.unit = "mmHg".into();
    blood_pressure.created_at = SEED_CLOCK_MS;
    blood_pressure.updated_at = SEED_CLOCK_MS;

    let mut weight = HealthMetric::new(DEMO_OWNER_ID, "weight", "82.5", SEED_CLOCK_MS - 2 * DAY_MS);
    weight.id = "demo-metric-002".into();
    weight.unit = "kg".into();
    weight.created_at = SEED_CLOCK_MS;
    weight.updated_at = SEED_CLOCK_MS;

    let mut glucose = HealthMetric::new(DEMO_OWNER_ID, "glucose", "108", SEED_CLOCK_MS - 10 * DAY_MS);
    glucose.id = "demo-metric-003".into();
    glucose.unit = "mg/dL".into();
    glucose.notes = Some("Fasting.".into());
    glucose.created_at = SEED_CLOCK_MS;
    glucose.updated_at = SEED_CLOCK_MS;

    let mut heart_rate =
        HealthMetric::new(DEMO_OWNER_ID, "heart_rate", "82", SEED_CLOCK_MS - DAY_MS);
    heart_rate.id = "demo-metric-004".into();
    heart_rate.unit = "bpm".into();
    heart_rate.created_at = SEED_CLOCK_MS;
    heart_rate.updated_at = SEED_CLOCK_MS;

    vec![blood_pressure, weight, glucose, heart_rate]
}

fn disease_analyses() -> Vec<DiseaseAnalysis> {
    vec![DiseaseAnalysis {
        id: "demo-analysis-001".into(),
        owner_id: DEMO_OWNER_ID.into(),
        family_member_id: None,
        condition: "Type 2 diabetes risk".into(),
        risk_factors: vec![
            "Borderline fasting glucose".into(),
            "Elevated blood pressure".into(),
        ],
        symptoms: vec!["Fatigue".into()],
        recommendation: "Repeat fasting glucose in three months; maintain current exercise plan."
            .into(),
        analyzed_at: SEED_CLOCK_MS - 9 * DAY_MS,
        created_at: SEED_CLOCK_MS,
        updated_at: SEED_CLOCK_MS,
    }]
}

fn health_trends() -> Vec<HealthTrend> {
    vec![HealthTrend {
        id: "demo-trend-001".into(),
        owner_id: DEMO_OWNER_ID.into(),
        metric_type: "blood_pressure".into(),
        period: "last 30 days".into(),
        direction: TrendDirection::Improving,
        observation: "Average systolic reading down 6 mmHg since medication adjustment.".into(),
        created_at: SEED_CLOCK_MS,
        updated_at: SEED_CLOCK_MS,
    }]
}

fn insurance_policies() -> Vec<InsurancePolicy> {
    let mut health = InsurancePolicy::new(DEMO_OWNER_ID, "Blue Shield");
    health.id = "demo-policy-001".into();
    health.policy_number = "BS-4471-8820".into();
    health.policy_type = "health".into();
    health.coverage_period = CoveragePeriod {
        start_date: SEED_CLOCK_MS - 14 * DAY_MS,
        end_date: SEED_CLOCK_MS + 351 * DAY_MS,
    };
    health.co_payment = CoPayment {
        primary_care: 25.0,
        specialist: 50.0,
        emergency: 250.0,
    };
    health.deductible = Deductible {
        individual: 1_500.0,
        family: 3_000.0,
        met: 320.0,
    };
    health.contact = PolicyContact {
        phone: "1-800-555-0114".into(),
        email: "members@example-blueshield.test".into(),
        website: "https://example-blueshield.test".into(),
    };
    health.documents = vec![InsuranceDocument {
        id: "demo-policy-doc-001".into(),
        name: "Member card".into(),
        file_name: "member_card.pdf".into(),
        uploaded_at: SEED_CLOCK_MS - 14 * DAY_MS,
    }];
    health.claims = vec![InsuranceClaim {
        id: "demo-claim-001".into(),
        claim_number: "CLM-2026-0042".into(),
        amount: 180.0,
        status: "approved".into(),
        filed_at: SEED_CLOCK_MS - 8 * DAY_MS,
        description: Some("Annual blood panel".into()),
    }];
    health.created_at = SEED_CLOCK_MS;
    health.updated_at = SEED_CLOCK_MS;

    let mut dental = InsurancePolicy::new(DEMO_OWNER_ID, "DeltaCare");
    dental.id = "demo-policy-002".into();
    dental.family_member_id = Some("demo-fam-002".into());
    dental.policy_number = "DC-1190-3345".into();
    dental.policy_type = "dental".into();
    dental.status = PolicyStatus::PendingRenewal;
    dental.coverage_period = CoveragePeriod {
        start_date: SEED_CLOCK_MS - 351 * DAY_MS,
        end_date: SEED_CLOCK_MS + 14 * DAY_MS,
    };
    dental.contact = PolicyContact {
        phone: "1-800-555-0187".into(),
        email: "support@example-deltacare.test".into(),
        website: "https://example-deltacare.test".into(),
    };
    dental.created_at = SEED_CLOCK_MS;
    dental.updated_at = SEED_CLOCK_MS;

    vec![health, dental]
}

fn insights() -> Vec<AiInsight> {
    vec![
        AiInsight {
            id: "demo-insight-001".into(),
            owner_id: DEMO_OWNER_ID.into(),
            title: "Hemoglobin below reference range".into(),
            body: "The latest blood panel shows hemoglobin at 10.2 g/dL. An iron supplement \
                   was prescribed; a follow-up CBC is due in four weeks."
                .into(),
            severity: InsightSeverity::Warning,
            actionable: true,
            source_record_ids: vec!["demo-rep-001".into(), "demo-rx-001".into()],
            created_at: SEED_CLOCK_MS,
            updated_at: SEED_CLOCK_MS,
        },
        AiInsight {
            id: "demo-insight-002".into(),
            owner_id: DEMO_OWNER_ID.into(),
            title: "Blood pressure trending down".into(),
            body: "Readings over the last month average 6 mmHg lower systolic.".into(),
            severity: InsightSeverity::Info,
            actionable: false,
            source_record_ids: vec!["demo-metric-001".into(), "demo-trend-001".into()],
            created_at: SEED_CLOCK_MS,
            updated_at: SEED_CLOCK_MS,
        },
    ]
}

fn reminders() -> Vec<SelfReminder> {
    let mut doses = SelfReminder::new(DEMO_OWNER_ID, "Evening medication");
    doses.id = "demo-rem-001".into();
    doses.schedule = ReminderSchedule {
        frequency: ReminderFrequency::Daily,
        times: vec!["20:00".into()],
        days_of_week: None,
    };
    doses.created_at = SEED_CLOCK_MS;
    doses.updated_at = SEED_CLOCK_MS;

    let mut pressure = SelfReminder::new(DEMO_OWNER_ID, "Log blood pressure");
    pressure.id = "demo-rem-002".into();
    pressure.schedule = ReminderSchedule {
        frequency: ReminderFrequency::Weekly,
        times: vec!["09:00".into()],
        days_of_week: Some(vec!["monday".into(), "thursday".into()]),
    };
    pressure.active = false;
    pressure.created_at = SEED_CLOCK_MS;
    pressure.updated_at = SEED_CLOCK_MS;

    vec![doses, pressure]
}

#[cfg(test)]
mod tests {
    use super::canonical_fixtures;
    use crate::model::EntityKind;
    use std::collections::BTreeSet;

    #[test]
    fn factories_are_deterministic() {
        for kind in EntityKind::ALL {
            assert_eq!(canonical_fixtures(kind), canonical_fixtures(kind));
        }
    }

    #[test]
    fn every_fixture_carries_id_and_owner() {
        for kind in EntityKind::ALL {
            let mut ids = BTreeSet::new();
            for record in canonical_fixtures(kind) {
                let id = record
                    .get("id")
                    .and_then(|value| value.as_str())
                    .expect("fixture has string id");
                assert!(ids.insert(id.to_string()), "duplicate fixture id {id}");
                let owner = record
                    .get(kind.owner_field())
                    .and_then(|value| value.as_str())
                    .expect("fixture has owner");
                assert_eq!(owner, super::DEMO_OWNER_ID);
            }
        }
    }
}
