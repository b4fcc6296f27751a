//! Self reminder endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::reminder::SelfReminder;
use crate::model::EntityKind;
use serde_json::{json, Value};

impl ApiRecord for SelfReminder {
    const KIND: EntityKind = EntityKind::SelfReminders;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<SelfReminder>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<SelfReminder>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, reminder: &SelfReminder) -> ApiResult<SelfReminder> {
    client.create_record(reminder)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<SelfReminder>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<SelfReminder>(id)
}

/// Toggles a reminder without rewriting its schedule.
pub fn set_active(
    client: &mut ApiClient<'_>,
    id: &str,
    active: bool,
) -> ApiResult<Option<SelfReminder>> {
    update(client, id, json!({ "active": active }))
}
