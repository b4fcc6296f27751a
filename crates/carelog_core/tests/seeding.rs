use carelog_core::db::{open_db, open_db_in_memory};
use carelog_core::model::EntityKind;
use carelog_core::seed::{ensure_seeded, fixtures, repair_collection};
use carelog_core::store::{CollectionStore, SqliteCollectionStore};
use serde_json::{json, Value};

#[test]
fn seeding_twice_leaves_the_blob_byte_identical() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    let first = ensure_seeded(&store, EntityKind::InsurancePolicies).unwrap();
    let blob_after_first = store.read_blob("insurancePolicies").unwrap().unwrap();

    let second = ensure_seeded(&store, EntityKind::InsurancePolicies).unwrap();
    let blob_after_second = store.read_blob("insurancePolicies").unwrap().unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);
    assert_eq!(blob_after_first, blob_after_second);
}

#[test]
fn seeder_populates_every_collection_with_canonical_fixtures() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    for kind in EntityKind::ALL {
        let seeded = ensure_seeded(&store, kind).unwrap();
        assert_eq!(seeded, fixtures::canonical_fixtures(kind));
        assert!(store.read_blob(kind.collection_key()).unwrap().is_some());
    }
}

#[test]
fn seeder_never_clobbers_live_data() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    let live = json!([{"id": "m-live", "userId": "u1", "name": "Imported"}]);
    store
        .write_blob("medications", &live.to_string())
        .unwrap();

    let loaded = ensure_seeded(&store, EntityKind::Medications).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0]["id"], "m-live");

    let blob = store.read_blob("medications").unwrap().unwrap();
    assert_eq!(blob, live.to_string());
}

#[test]
fn malformed_blob_reads_empty_and_is_not_silently_repaired() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    store.write_blob("medications", "{definitely not json").unwrap();

    let loaded = ensure_seeded(&store, EntityKind::Medications).unwrap();
    assert!(loaded.is_empty());

    // The broken blob is still there for an explicit repair to replace.
    let blob = store.read_blob("medications").unwrap().unwrap();
    assert_eq!(blob, "{definitely not json");
}

#[test]
fn non_array_blob_counts_as_malformed() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    store
        .write_blob("appointments", &json!({"oops": true}).to_string())
        .unwrap();

    let loaded = ensure_seeded(&store, EntityKind::Appointments).unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn explicit_repair_replaces_malformed_blob_with_fixtures() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    store.write_blob("prescriptions", "<broken>").unwrap();

    let repaired = repair_collection(&store, EntityKind::Prescriptions).unwrap();
    assert_eq!(
        repaired,
        fixtures::canonical_fixtures(EntityKind::Prescriptions)
    );

    let blob = store.read_blob("prescriptions").unwrap().unwrap();
    let parsed: Vec<Value> = serde_json::from_str(&blob).unwrap();
    assert_eq!(parsed, repaired);
}

#[test]
fn repair_leaves_a_healthy_collection_untouched() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();

    let live = json!([{"id": "rx-live", "patientId": "u1", "medication": "Ibuprofen"}]);
    store
        .write_blob("prescriptions", &live.to_string())
        .unwrap();

    let result = repair_collection(&store, EntityKind::Prescriptions).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0]["id"], "rx-live");
    assert_eq!(
        store.read_blob("prescriptions").unwrap().unwrap(),
        live.to_string()
    );
}

#[test]
fn seeded_collections_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("carelog.sqlite3");

    {
        let conn = open_db(&db_path).unwrap();
        let store = SqliteCollectionStore::try_new(&conn).unwrap();
        ensure_seeded(&store, EntityKind::Medications).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let store = SqliteCollectionStore::try_new(&conn).unwrap();
    let reloaded = ensure_seeded(&store, EntityKind::Medications).unwrap();
    assert_eq!(
        reloaded,
        fixtures::canonical_fixtures(EntityKind::Medications)
    );
}
