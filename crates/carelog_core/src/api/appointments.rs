//! Appointment endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::appointment::Appointment;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for Appointment {
    const KIND: EntityKind = EntityKind::Appointments;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<Appointment>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<Appointment>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, appointment: &Appointment) -> ApiResult<Appointment> {
    client.create_record(appointment)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<Appointment>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<Appointment>(id)
}
