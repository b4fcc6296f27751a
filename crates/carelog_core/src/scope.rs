//! Ownership filter for collection reads.
//!
//! # Responsibility
//! - Decide which records a caller identity may see.
//!
//! # Invariants
//! - A record is visible iff its owner field equals the caller id, or both
//!   values carry the reserved demo prefix.
//! - The demo relaxation exists so demo sessions (random ids under the
//!   reserved prefix) share the canonical seeded fixtures; it never widens
//!   visibility for an explicit, non-demo identity in either direction.

use serde_json::Value;

/// Reserved prefix marking demonstration identities.
pub const DEMO_IDENTITY_PREFIX: &str = "demo-";

/// Returns whether an identity value is a demo identity.
pub fn is_demo_identity(value: &str) -> bool {
    value.starts_with(DEMO_IDENTITY_PREFIX)
}

/// Returns whether one record is visible to `caller_id`.
///
/// Records without a string owner field are visible to no one; they can
/// only have been written around the dispatcher.
pub fn is_visible_to(record: &Value, owner_field: &str, caller_id: &str) -> bool {
    let Some(owner) = record.get(owner_field).and_then(Value::as_str) else {
        return false;
    };
    owner == caller_id || (is_demo_identity(owner) && is_demo_identity(caller_id))
}

/// Filters a collection down to the records visible to `caller_id`.
pub fn scope_to_owner(records: &[Value], owner_field: &str, caller_id: &str) -> Vec<Value> {
    records
        .iter()
        .filter(|record| is_visible_to(record, owner_field, caller_id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{is_visible_to, scope_to_owner};
    use serde_json::json;

    #[test]
    fn owner_sees_own_records_only() {
        let records = vec![
            json!({"id": "1", "userId": "alice"}),
            json!({"id": "2", "userId": "bob"}),
        ];
        let visible = scope_to_owner(&records, "userId", "alice");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0]["id"], "1");
    }

    #[test]
    fn demo_records_are_shared_across_demo_identities() {
        let record = json!({"id": "1", "userId": "demo-user"});
        assert!(is_visible_to(&record, "userId", "demo-7f3a"));
        assert!(is_visible_to(&record, "userId", "demo-user"));
    }

    #[test]
    fn demo_fixtures_stay_hidden_from_real_identities() {
        let record = json!({"id": "1", "userId": "demo-user"});
        assert!(!is_visible_to(&record, "userId", "alice"));
    }

    #[test]
    fn demo_callers_cannot_see_real_user_records() {
        let record = json!({"id": "1", "userId": "alice"});
        assert!(!is_visible_to(&record, "userId", "demo-7f3a"));
    }

    #[test]
    fn demo_relaxation_does_not_leak_between_real_identities() {
        let record = json!({"id": "1", "userId": "alice"});
        assert!(!is_visible_to(&record, "userId", "bob"));
    }

    #[test]
    fn record_without_owner_field_is_hidden() {
        let record = json!({"id": "1"});
        assert!(!is_visible_to(&record, "userId", "alice"));
    }

    #[test]
    fn owner_field_name_is_data_not_special_cased() {
        let record = json!({"id": "rx1", "patientId": "alice"});
        assert!(is_visible_to(&record, "patientId", "alice"));
        assert!(!is_visible_to(&record, "userId", "alice"));
    }
}
