//! Derived insight endpoints.
//!
//! Insight generators persist their output here; regular callers mostly
//! read. The store does not police derived-ness — traceability lives in
//! `sourceRecordIds`.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::insight::AiInsight;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for AiInsight {
    const KIND: EntityKind = EntityKind::AiInsights;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<AiInsight>> {
    client.list_records()
}

/// Lists only insights that suggest a concrete user action.
pub fn list_actionable(client: &mut ApiClient<'_>) -> ApiResult<Vec<AiInsight>> {
    Ok(list(client)?
        .into_iter()
        .filter(|insight| insight.actionable)
        .collect())
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<AiInsight>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, insight: &AiInsight) -> ApiResult<AiInsight> {
    client.create_record(insight)
}

pub fn update(client: &mut ApiClient<'_>, id: &str, patch: Value) -> ApiResult<Option<AiInsight>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<AiInsight>(id)
}
