//! Insurance policy domain model.
//!
//! # Responsibility
//! - Define policy records with their nested coverage, payment and contact
//!   sub-records, plus owned document and claim collections.
//!
//! # Invariants
//! - Status transitions start from `active`; every status is
//!   operator-settable and none is terminal.
//! - Documents and claims live inside their policy record, not in separate
//!   collections.

use serde::{Deserialize, Serialize};

/// Policy lifecycle status. Operator-settable, no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyStatus {
    #[default]
    Active,
    Expired,
    PendingRenewal,
    Cancelled,
}

/// Coverage validity window, Unix epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoveragePeriod {
    pub start_date: i64,
    pub end_date: i64,
}

/// Co-payment amounts per visit type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CoPayment {
    #[serde(default)]
    pub primary_care: f64,
    #[serde(default)]
    pub specialist: f64,
    #[serde(default)]
    pub emergency: f64,
}

/// Deductible configuration and progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Deductible {
    #[serde(default)]
    pub individual: f64,
    #[serde(default)]
    pub family: f64,
    /// Amount already met in the current period.
    #[serde(default)]
    pub met: f64,
}

/// Insurer contact sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PolicyContact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
}

/// A document attached to a policy (card scan, terms, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceDocument {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub file_name: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub uploaded_at: i64,
}

/// A claim filed under a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsuranceClaim {
    pub id: String,
    #[serde(default)]
    pub claim_number: String,
    #[serde(default)]
    pub amount: f64,
    /// Free-text claim state ("submitted", "approved", "denied", ...).
    #[serde(default)]
    pub status: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub filed_at: i64,
    #[serde(default)]
    pub description: Option<String>,
}

/// A health-insurance policy owned by a user, optionally covering a family
/// member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub family_member_id: Option<String>,
    pub provider: String,
    #[serde(default)]
    pub policy_number: String,
    /// Plan category ("health", "dental", "vision", ...).
    #[serde(default)]
    pub policy_type: String,
    #[serde(default)]
    pub status: PolicyStatus,
    #[serde(default)]
    pub coverage_period: CoveragePeriod,
    #[serde(default)]
    pub co_payment: CoPayment,
    #[serde(default)]
    pub deductible: Deductible,
    #[serde(default)]
    pub contact: PolicyContact,
    #[serde(default)]
    pub documents: Vec<InsuranceDocument>,
    #[serde(default)]
    pub claims: Vec<InsuranceClaim>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl InsurancePolicy {
    pub fn new(owner_id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            family_member_id: None,
            provider: provider.into(),
            policy_number: String::new(),
            policy_type: String::new(),
            status: PolicyStatus::Active,
            coverage_period: CoveragePeriod::default(),
            co_payment: CoPayment::default(),
            deductible: Deductible::default(),
            contact: PolicyContact::default(),
            documents: Vec::new(),
            claims: Vec::new(),
            created_at: 0,
            updated_at: 0,
        }
    }
}
