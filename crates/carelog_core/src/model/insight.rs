//! Disease analysis and derived insight domain models.
//!
//! # Invariants
//! - An insight is derived data: it must stay traceable to the records that
//!   produced it via `source_record_ids`.

use serde::{Deserialize, Serialize};

/// A rule-based condition assessment over a person's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseAnalysis {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub family_member_id: Option<String>,
    pub condition: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub recommendation: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub analyzed_at: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Severity of a derived insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsightSeverity {
    #[default]
    Info,
    Warning,
    Alert,
}

/// A derived, rule-generated observation persisted by insight generators.
///
/// Insights are never authored directly by a user; generators consume query
/// results and create these records through the same facade as any caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub severity: InsightSeverity,
    /// Whether the insight suggests a concrete user action.
    #[serde(default)]
    pub actionable: bool,
    /// Ids of the reports/metrics/prescriptions this insight was derived
    /// from.
    #[serde(default)]
    pub source_record_ids: Vec<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
