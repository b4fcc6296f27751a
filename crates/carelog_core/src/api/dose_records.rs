//! Dose record endpoints.
//!
//! The status transition helpers build the patch only; legality checks
//! (`DoseStatus::can_transition_to`) stay with the caller, matching the
//! layer's no-validation contract.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::dose::{DoseRecord, DoseStatus};
use crate::model::EntityKind;
use serde_json::{json, Value};

impl ApiRecord for DoseRecord {
    const KIND: EntityKind = EntityKind::DoseRecords;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<DoseRecord>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<DoseRecord>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, dose: &DoseRecord) -> ApiResult<DoseRecord> {
    client.create_record(dose)
}

pub fn update(client: &mut ApiClient<'_>, id: &str, patch: Value) -> ApiResult<Option<DoseRecord>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<DoseRecord>(id)
}

/// Records a dose as taken at `taken_at_ms`.
pub fn mark_taken(
    client: &mut ApiClient<'_>,
    id: &str,
    taken_at_ms: i64,
) -> ApiResult<Option<DoseRecord>> {
    update(
        client,
        id,
        json!({ "status": DoseStatus::Taken, "takenAt": taken_at_ms }),
    )
}

/// Records a dose as missed.
pub fn mark_missed(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<DoseRecord>> {
    update(client, id, json!({ "status": DoseStatus::Missed }))
}

/// Records a dose as deliberately skipped.
pub fn mark_skipped(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<DoseRecord>> {
    update(client, id, json!({ "status": DoseStatus::Skipped }))
}
