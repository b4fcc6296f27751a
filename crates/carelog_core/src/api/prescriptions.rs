//! Prescription endpoints.
//!
//! Prescriptions are the one collection whose owner reference travels as
//! `patientId` on the wire; the model's serde mapping hides that from
//! typed callers.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::prescription::Prescription;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for Prescription {
    const KIND: EntityKind = EntityKind::Prescriptions;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<Prescription>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<Prescription>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, prescription: &Prescription) -> ApiResult<Prescription> {
    client.create_record(prescription)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<Prescription>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<Prescription>(id)
}
