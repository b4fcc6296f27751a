//! Health trend endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::metric::HealthTrend;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for HealthTrend {
    const KIND: EntityKind = EntityKind::HealthTrends;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<HealthTrend>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<HealthTrend>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, trend: &HealthTrend) -> ApiResult<HealthTrend> {
    client.create_record(trend)
}

pub fn update(client: &mut ApiClient<'_>, id: &str, patch: Value) -> ApiResult<Option<HealthTrend>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<HealthTrend>(id)
}
