//! Insurance policy endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::insurance::{InsurancePolicy, PolicyStatus};
use crate::model::EntityKind;
use serde_json::{json, Value};

impl ApiRecord for InsurancePolicy {
    const KIND: EntityKind = EntityKind::InsurancePolicies;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<InsurancePolicy>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<InsurancePolicy>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, policy: &InsurancePolicy) -> ApiResult<InsurancePolicy> {
    client.create_record(policy)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<InsurancePolicy>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<InsurancePolicy>(id)
}

/// Sets the policy lifecycle status; every status is operator-settable.
pub fn set_status(
    client: &mut ApiClient<'_>,
    id: &str,
    status: PolicyStatus,
) -> ApiResult<Option<InsurancePolicy>> {
    update(client, id, json!({ "status": status }))
}
