//! Medication endpoints.
//!
//! # Responsibility
//! - Typed CRUD over `/api/medications` plus lifecycle conveniences.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::medication::{Medication, MedicationStatus};
use crate::model::EntityKind;
use serde_json::{json, Value};

impl ApiRecord for Medication {
    const KIND: EntityKind = EntityKind::Medications;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<Medication>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<Medication>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, medication: &Medication) -> ApiResult<Medication> {
    client.create_record(medication)
}

pub fn update(client: &mut ApiClient<'_>, id: &str, patch: Value) -> ApiResult<Option<Medication>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<Medication>(id)
}

/// Marks a medication discontinued without touching other fields.
pub fn discontinue(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<Medication>> {
    set_status(client, id, MedicationStatus::Discontinued)
}

/// Marks a medication course completed.
pub fn complete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<Medication>> {
    set_status(client, id, MedicationStatus::Completed)
}

fn set_status(
    client: &mut ApiClient<'_>,
    id: &str,
    status: MedicationStatus,
) -> ApiResult<Option<Medication>> {
    update(client, id, json!({ "status": status }))
}
