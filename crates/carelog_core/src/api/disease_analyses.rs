//! Disease analysis endpoints.

use super::{ApiClient, ApiRecord, ApiResult};
use crate::model::insight::DiseaseAnalysis;
use crate::model::EntityKind;
use serde_json::Value;

impl ApiRecord for DiseaseAnalysis {
    const KIND: EntityKind = EntityKind::DiseaseAnalyses;
}

pub fn list(client: &mut ApiClient<'_>) -> ApiResult<Vec<DiseaseAnalysis>> {
    client.list_records()
}

pub fn get(client: &mut ApiClient<'_>, id: &str) -> ApiResult<Option<DiseaseAnalysis>> {
    client.get_record(id)
}

pub fn create(client: &mut ApiClient<'_>, analysis: &DiseaseAnalysis) -> ApiResult<DiseaseAnalysis> {
    client.create_record(analysis)
}

pub fn update(
    client: &mut ApiClient<'_>,
    id: &str,
    patch: Value,
) -> ApiResult<Option<DiseaseAnalysis>> {
    client.update_record(id, patch)
}

pub fn delete(client: &mut ApiClient<'_>, id: &str) -> ApiResult<bool> {
    client.delete_record::<DiseaseAnalysis>(id)
}
