//! Health report endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::report::HealthReport;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for HealthReport {
    const KIND: EntityKind = EntityKind::HealthReports;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<HealthReport>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<HealthReport>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, report: &HealthReport) -> ApiResult<HealthReport> {
    client.create_record(report)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<HealthReport>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<HealthReport>(id)
}
