//! Family member endpoints.
//!
//! Deleting a family member does not cascade: dependent medications,
//! reports, analyses and policies keep their `familyMemberId` as written.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::family::FamilyMember;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for FamilyMember {
    const KIND: EntityKind = EntityKind::FamilyMembers;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<FamilyMember>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<FamilyMember>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, member: &FamilyMember) -> ApiResult<FamilyMember> {
    client.create_record(member)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<FamilyMember>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<FamilyMember>(id)
}
