//! Health report domain model and analysis derivation.
//!
//! # Responsibility
//! - Define lab/health report records with optional nested analysis.
//! - Derive the analysis summary (status counts + risk level) from the
//!   per-parameter classifications.
//!
//! # Invariants
//! - `AnalysisSummary` is derived data; it must agree with the parameter
//!   list it was computed from.

use serde::{Deserialize, Serialize};

/// Classification of one measured parameter against its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParameterStatus {
    #[default]
    Normal,
    Borderline,
    High,
    Low,
    Critical,
}

impl ParameterStatus {
    /// High, low and critical all count as abnormal.
    pub fn is_abnormal(self) -> bool {
        matches!(self, Self::High | Self::Low | Self::Critical)
    }
}

/// Overall risk classification derived from parameter statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    Moderate,
    High,
}

/// One measured value inside a report analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportParameter {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub reference_range: String,
    #[serde(default)]
    pub status: ParameterStatus,
}

/// Derived roll-up over a parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub normal_count: u32,
    pub borderline_count: u32,
    pub abnormal_count: u32,
    pub risk_level: RiskLevel,
}

impl AnalysisSummary {
    /// Computes the summary for a parameter list.
    ///
    /// Risk classification: any critical parameter is high risk; any other
    /// abnormal parameter is moderate; borderline-only results are moderate
    /// only when more than one parameter is borderline.
    pub fn derive(parameters: &[ReportParameter]) -> Self {
        let mut summary = Self::default();
        let mut has_critical = false;

        for parameter in parameters {
            match parameter.status {
                ParameterStatus::Normal => summary.normal_count += 1,
                ParameterStatus::Borderline => summary.borderline_count += 1,
                ParameterStatus::Critical => {
                    summary.abnormal_count += 1;
                    has_critical = true;
                }
                ParameterStatus::High | ParameterStatus::Low => summary.abnormal_count += 1,
            }
        }

        summary.risk_level = if has_critical {
            RiskLevel::High
        } else if summary.abnormal_count > 0 || summary.borderline_count > 1 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        };
        summary
    }
}

/// Optional nested analysis attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportAnalysis {
    #[serde(default)]
    pub parameters: Vec<ReportParameter>,
    #[serde(default)]
    pub summary: AnalysisSummary,
}

impl ReportAnalysis {
    /// Builds an analysis whose summary is derived from `parameters`.
    pub fn from_parameters(parameters: Vec<ReportParameter>) -> Self {
        let summary = AnalysisSummary::derive(&parameters);
        Self {
            parameters,
            summary,
        }
    }
}

/// An uploaded or recorded health report, owned by the user or scoped to a
/// family member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    #[serde(default)]
    pub family_member_id: Option<String>,
    pub title: String,
    /// Report category ("lab", "imaging", "discharge", ...).
    #[serde(default)]
    pub report_type: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub report_date: i64,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub analysis: Option<ReportAnalysis>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl HealthReport {
    pub fn new(owner_id: impl Into<String>, title: impl Into<String>, report_date: i64) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            family_member_id: None,
            title: title.into(),
            report_type: String::new(),
            report_date,
            file_name: None,
            analysis: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AnalysisSummary, ParameterStatus, ReportParameter, RiskLevel};

    fn parameter(name: &str, status: ParameterStatus) -> ReportParameter {
        ReportParameter {
            name: name.to_string(),
            value: String::new(),
            unit: String::new(),
            reference_range: String::new(),
            status,
        }
    }

    #[test]
    fn all_normal_is_low_risk() {
        let summary = AnalysisSummary::derive(&[
            parameter("hemoglobin", ParameterStatus::Normal),
            parameter("platelets", ParameterStatus::Normal),
        ]);
        assert_eq!(summary.normal_count, 2);
        assert_eq!(summary.abnormal_count, 0);
        assert_eq!(summary.risk_level, RiskLevel::Low);
    }

    #[test]
    fn critical_parameter_forces_high_risk() {
        let summary = AnalysisSummary::derive(&[
            parameter("hemoglobin", ParameterStatus::Normal),
            parameter("potassium", ParameterStatus::Critical),
        ]);
        assert_eq!(summary.abnormal_count, 1);
        assert_eq!(summary.risk_level, RiskLevel::High);
    }

    #[test]
    fn high_or_low_without_critical_is_moderate() {
        let summary = AnalysisSummary::derive(&[
            parameter("ldl", ParameterStatus::High),
            parameter("hdl", ParameterStatus::Low),
        ]);
        assert_eq!(summary.abnormal_count, 2);
        assert_eq!(summary.risk_level, RiskLevel::Moderate);
    }

    #[test]
    fn single_borderline_stays_low_risk() {
        let summary = AnalysisSummary::derive(&[
            parameter("glucose", ParameterStatus::Borderline),
            parameter("hemoglobin", ParameterStatus::Normal),
        ]);
        assert_eq!(summary.borderline_count, 1);
        assert_eq!(summary.risk_level, RiskLevel::Low);

        let two_borderline = AnalysisSummary::derive(&[
            parameter("glucose", ParameterStatus::Borderline),
            parameter("ldl", ParameterStatus::Borderline),
        ]);
        assert_eq!(two_borderline.risk_level, RiskLevel::Moderate);
    }
}
