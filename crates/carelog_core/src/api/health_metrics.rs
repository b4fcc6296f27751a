//! Health metric endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::metric::HealthMetric;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for HealthMetric {
    const KIND: EntityKind = EntityKind::HealthMetrics;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<HealthMetric>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<HealthMetric>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, metric: &HealthMetric) -> ApiResult<HealthMetric> {
    client.create_record(metric)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<HealthMetric>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<HealthMetric>(id)
}
