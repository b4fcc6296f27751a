//! Request dispatcher over the entity collections.
//!
//! # Responsibility
//! - Resolve simulated requests against the route table and run the
//!   matching collection operation.
//! - Reload the routed collection from the backing store before every use
//!   and write mutations through immediately after.
//!
//! # Invariants
//! - CREATE assigns a fresh id and both timestamps; UPDATE never mutates
//!   `id` or `createdAt`; DELETE is a hard delete.
//! - Reads (LIST/GET) pass through the ownership filter; the layer performs
//!   no payload validation (that is the caller's contract).
//! - Unroutable requests and missing ids produce a structured `NotFound`
//!   response, never an `Err`.

use crate::model::{now_epoch_ms, EntityKind};
use crate::scope::{is_visible_to, scope_to_owner};
use crate::seed;
use crate::store::{CollectionCache, SqliteCollectionStore, StoreResult};
use log::info;
use rusqlite::Connection;
use serde_json::{json, Map, Value};
use uuid::Uuid;

mod routes;

pub use routes::{resolve_route, route_segment, ApiRequest, Route, RouteAction, Verb};

/// Outcome of one dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Single entity (GET/CREATE/UPDATE).
    Record(Value),
    /// Owner-scoped collection (LIST).
    Records(Vec<Value>),
    /// Success marker for DELETE.
    Deleted { id: String },
    /// Structured not-found marker: unknown route or missing entity.
    NotFound { message: String },
}

impl ApiResponse {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Maps (path, verb) requests onto collection operations.
///
/// One dispatcher owns one `CollectionCache`; construct one per logical
/// session. Operations run to completion synchronously.
pub struct Dispatcher<'conn> {
    store: SqliteCollectionStore<'conn>,
    cache: CollectionCache,
}

impl<'conn> Dispatcher<'conn> {
    /// Constructs a dispatcher over a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        Ok(Self {
            store: SqliteCollectionStore::try_new(conn)?,
            cache: CollectionCache::new(),
        })
    }

    /// Dispatches one simulated request.
    ///
    /// `Err` is reserved for storage faults; every routing or lookup miss
    /// comes back as `ApiResponse::NotFound` so callers branch without
    /// exception handling.
    pub fn dispatch(&mut self, request: &ApiRequest) -> StoreResult<ApiResponse> {
        let Some(route) = resolve_route(&request.path, request.verb) else {
            info!(
                "event=dispatch module=dispatch status=not_found verb={} path={}",
                request.verb, request.path
            );
            return Ok(ApiResponse::NotFound {
                message: format!("no route for {} {}", request.verb, request.path),
            });
        };

        // Reload-before-use: other call paths (or an earlier session over
        // the same file) may have written this collection since we last saw
        // it. First access seeds empty collections.
        let records = seed::ensure_seeded(&self.store, route.kind)?;
        self.cache.replace(route.kind, records);

        let response = match &route.action {
            RouteAction::List => self.handle_list(route.kind, &request.caller_id),
            RouteAction::Get(id) => self.handle_get(route.kind, id, &request.caller_id),
            RouteAction::Create => {
                self.handle_create(route.kind, &request.caller_id, request.body.as_ref())?
            }
            RouteAction::Update(id) => {
                self.handle_update(route.kind, id, request.body.as_ref())?
            }
            RouteAction::Delete(id) => self.handle_delete(route.kind, id)?,
        };

        info!(
            "event=dispatch module=dispatch status={} verb={} path={} kind={} action={}",
            if response.is_not_found() { "not_found" } else { "ok" },
            request.verb,
            request.path,
            route.kind.collection_key(),
            route.action.name(),
        );
        Ok(response)
    }

    fn handle_list(&self, kind: EntityKind, caller_id: &str) -> ApiResponse {
        ApiResponse::Records(scope_to_owner(
            self.cache.records(kind),
            kind.owner_field(),
            caller_id,
        ))
    }

    fn handle_get(&self, kind: EntityKind, id: &str, caller_id: &str) -> ApiResponse {
        let found = self
            .cache
            .records(kind)
            .iter()
            .find(|record| record_id(record) == Some(id))
            .filter(|record| is_visible_to(record, kind.owner_field(), caller_id));
        match found {
            Some(record) => ApiResponse::Record(record.clone()),
            None => not_found(kind, id),
        }
    }

    fn handle_create(
        &mut self,
        kind: EntityKind,
        caller_id: &str,
        body: Option<&Value>,
    ) -> StoreResult<ApiResponse> {
        let mut fields = match body {
            Some(Value::Object(map)) => map.clone(),
            // No validation at this layer: an absent or non-object body
            // still creates a (mostly empty) record.
            _ => Map::new(),
        };

        let now = now_epoch_ms();
        fields.insert("id".into(), json!(Uuid::new_v4().to_string()));
        fields.insert("createdAt".into(), json!(now));
        fields.insert("updatedAt".into(), json!(now));

        let owner_field = kind.owner_field();
        let owner_is_set = fields
            .get(owner_field)
            .and_then(Value::as_str)
            .is_some_and(|owner| !owner.is_empty());
        if !owner_is_set {
            fields.insert(owner_field.into(), json!(caller_id));
        }

        let record = Value::Object(fields);
        self.cache.records_mut(kind).push(record.clone());
        self.cache.persist(kind, &self.store)?;
        Ok(ApiResponse::Record(record))
    }

    fn handle_update(
        &mut self,
        kind: EntityKind,
        id: &str,
        body: Option<&Value>,
    ) -> StoreResult<ApiResponse> {
        let now = now_epoch_ms();
        let updated = {
            let records = self.cache.records_mut(kind);
            let existing = records
                .iter_mut()
                .find(|record| record_id(record) == Some(id));
            match existing {
                Some(record) => {
                    merge_record_patch(record, body, now);
                    Some(record.clone())
                }
                None => None,
            }
        };

        match updated {
            Some(record) => {
                self.cache.persist(kind, &self.store)?;
                Ok(ApiResponse::Record(record))
            }
            None => Ok(not_found(kind, id)),
        }
    }

    fn handle_delete(&mut self, kind: EntityKind, id: &str) -> StoreResult<ApiResponse> {
        let removed = {
            let records = self.cache.records_mut(kind);
            let before = records.len();
            records.retain(|record| record_id(record) != Some(id));
            records.len() != before
        };

        if removed {
            self.cache.persist(kind, &self.store)?;
            Ok(ApiResponse::Deleted { id: id.to_string() })
        } else {
            Ok(not_found(kind, id))
        }
    }
}

fn not_found(kind: EntityKind, id: &str) -> ApiResponse {
    ApiResponse::NotFound {
        message: format!("no {} record with id {id}", kind.collection_key()),
    }
}

fn record_id(record: &Value) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}

/// Merges patch fields onto an existing record.
///
/// `id` and `createdAt` are immutable; `updatedAt` is always refreshed,
/// even for an empty patch.
fn merge_record_patch(existing: &mut Value, patch: Option<&Value>, now: i64) {
    let Some(fields) = existing.as_object_mut() else {
        return;
    };

    if let Some(Value::Object(patch_fields)) = patch {
        for (key, value) in patch_fields {
            if key == "id" || key == "createdAt" {
                continue;
            }
            fields.insert(key.clone(), value.clone());
        }
    }
    fields.insert("updatedAt".into(), json!(now));
}

#[cfg(test)]
mod tests {
    use super::merge_record_patch;
    use serde_json::json;

    #[test]
    fn merge_changes_named_fields_and_updated_at_only() {
        let mut record = json!({
            "id": "m-1",
            "name": "Metformin",
            "dosage": "500 mg",
            "createdAt": 100,
            "updatedAt": 100,
        });

        merge_record_patch(&mut record, Some(&json!({"dosage": "850 mg"})), 200);

        assert_eq!(record["dosage"], "850 mg");
        assert_eq!(record["name"], "Metformin");
        assert_eq!(record["createdAt"], 100);
        assert_eq!(record["updatedAt"], 200);
    }

    #[test]
    fn merge_never_rewrites_id_or_created_at() {
        let mut record = json!({"id": "m-1", "createdAt": 100, "updatedAt": 100});

        merge_record_patch(
            &mut record,
            Some(&json!({"id": "hijacked", "createdAt": 0})),
            200,
        );

        assert_eq!(record["id"], "m-1");
        assert_eq!(record["createdAt"], 100);
    }

    #[test]
    fn empty_patch_still_refreshes_updated_at() {
        let mut record = json!({"id": "m-1", "createdAt": 100, "updatedAt": 100});
        merge_record_patch(&mut record, None, 250);
        assert_eq!(record["updatedAt"], 250);
    }
}
