//! Health metric and trend domain models.

use serde::{Deserialize, Serialize};

/// One recorded measurement (blood pressure, weight, glucose, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    /// Measurement category ("blood_pressure", "weight", "glucose", ...).
    pub metric_type: String,
    /// Value as entered; compound readings keep their display form
    /// ("128/82").
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub unit: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub recorded_at: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl HealthMetric {
    pub fn new(
        owner_id: impl Into<String>,
        metric_type: impl Into<String>,
        value: impl Into<String>,
        recorded_at: i64,
    ) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            metric_type: metric_type.into(),
            value: value.into(),
            unit: String::new(),
            recorded_at,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}

/// Direction of a metric over an observation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Improving,
    #[default]
    Stable,
    Declining,
}

/// A derived observation about how one metric moved over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthTrend {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    pub metric_type: String,
    /// Observation window as displayed ("last 30 days").
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub direction: TrendDirection,
    #[serde(default)]
    pub observation: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
