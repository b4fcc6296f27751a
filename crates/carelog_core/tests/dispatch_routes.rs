use carelog_core::db::open_db_in_memory;
use carelog_core::dispatch::{ApiRequest, ApiResponse, Dispatcher, Verb};
use carelog_core::store::{CollectionStore, SqliteCollectionStore};
use serde_json::json;

#[test]
fn unknown_paths_and_verb_combinations_return_structured_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let cases = [
        ApiRequest::new(Verb::Get, "/api/unknown-things", "demo-user"),
        ApiRequest::new(Verb::Get, "/totally/elsewhere", "demo-user"),
        ApiRequest::new(Verb::Post, "/api/medications/some-id", "demo-user"),
        ApiRequest::new(Verb::Put, "/api/medications", "demo-user"),
        ApiRequest::new(Verb::Delete, "/api/medications", "demo-user"),
    ];

    for request in cases {
        let response = dispatcher.dispatch(&request).unwrap();
        assert!(
            response.is_not_found(),
            "expected not-found for {} {}",
            request.verb,
            request.path
        );
    }
}

#[test]
fn id_presence_disambiguates_list_from_get() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let list = dispatcher
        .dispatch(&ApiRequest::new(Verb::Get, "/api/medications", "demo-user"))
        .unwrap();
    let ApiResponse::Records(records) = list else {
        panic!("list should return a collection");
    };
    assert!(!records.is_empty());

    let get = dispatcher
        .dispatch(&ApiRequest::new(
            Verb::Get,
            "/api/medications/demo-med-001",
            "demo-user",
        ))
        .unwrap();
    let ApiResponse::Record(record) = get else {
        panic!("get should return a single record");
    };
    assert_eq!(record["id"], "demo-med-001");
}

#[test]
fn create_assigns_fresh_id_and_both_timestamps() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let request = ApiRequest::new(Verb::Post, "/api/medications", "u1")
        .with_body(json!({"name": "Ibuprofen", "userId": "u1"}));
    let ApiResponse::Record(record) = dispatcher.dispatch(&request).unwrap() else {
        panic!("create should return the stored record");
    };

    let id = record["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(!id.starts_with("demo-"));
    let created_at = record["createdAt"].as_i64().unwrap();
    assert!(created_at > 0);
    assert_eq!(created_at, record["updatedAt"].as_i64().unwrap());
}

#[test]
fn create_defaults_the_owner_field_to_the_caller() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let request = ApiRequest::new(Verb::Post, "/api/medications", "u9")
        .with_body(json!({"name": "Cetirizine"}));
    let ApiResponse::Record(record) = dispatcher.dispatch(&request).unwrap() else {
        panic!("create should return the stored record");
    };
    assert_eq!(record["userId"], "u9");

    // Prescriptions use their inherited owner wire name.
    let request = ApiRequest::new(Verb::Post, "/api/prescriptions", "u9")
        .with_body(json!({"medication": "Amoxicillin"}));
    let ApiResponse::Record(record) = dispatcher.dispatch(&request).unwrap() else {
        panic!("create should return the stored record");
    };
    assert_eq!(record["patientId"], "u9");
    assert!(record.get("userId").is_none());
}

#[test]
fn create_without_a_body_still_persists_a_record() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let request = ApiRequest::new(Verb::Post, "/api/health-metrics", "u1");
    let ApiResponse::Record(record) = dispatcher.dispatch(&request).unwrap() else {
        panic!("create should return the stored record");
    };
    assert!(record["id"].as_str().is_some());
    assert_eq!(record["userId"], "u1");
}

#[test]
fn update_ignores_id_and_created_at_in_the_patch() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let create = ApiRequest::new(Verb::Post, "/api/medications", "u1")
        .with_body(json!({"name": "Metformin", "userId": "u1"}));
    let ApiResponse::Record(created) = dispatcher.dispatch(&create).unwrap() else {
        panic!("create should return the stored record");
    };
    let id = created["id"].as_str().unwrap().to_string();

    let update = ApiRequest::new(Verb::Put, format!("/api/medications/{id}"), "u1").with_body(
        json!({"id": "hijacked", "createdAt": 1, "dosage": "850 mg"}),
    );
    let ApiResponse::Record(updated) = dispatcher.dispatch(&update).unwrap() else {
        panic!("update should return the stored record");
    };

    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_eq!(updated["dosage"], "850 mg");
}

#[test]
fn update_and_delete_on_missing_ids_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let update = ApiRequest::new(Verb::Put, "/api/medications/nope", "u1")
        .with_body(json!({"dosage": "850 mg"}));
    assert!(dispatcher.dispatch(&update).unwrap().is_not_found());

    let delete = ApiRequest::new(Verb::Delete, "/api/medications/nope", "u1");
    assert!(dispatcher.dispatch(&delete).unwrap().is_not_found());
}

#[test]
fn delete_returns_a_marker_then_not_found_on_repeat() {
    let conn = open_db_in_memory().unwrap();
    let mut dispatcher = Dispatcher::try_new(&conn).unwrap();

    let create = ApiRequest::new(Verb::Post, "/api/appointments", "u1")
        .with_body(json!({"title": "Checkup", "userId": "u1"}));
    let ApiResponse::Record(created) = dispatcher.dispatch(&create).unwrap() else {
        panic!("create should return the stored record");
    };
    let id = created["id"].as_str().unwrap().to_string();

    let delete = ApiRequest::new(Verb::Delete, format!("/api/appointments/{id}"), "u1");
    let response = dispatcher.dispatch(&delete).unwrap();
    assert_eq!(response, ApiResponse::Deleted { id: id.clone() });

    assert!(dispatcher.dispatch(&delete).unwrap().is_not_found());
}

#[test]
fn dispatch_reloads_collections_written_by_other_dispatchers() {
    let conn = open_db_in_memory().unwrap();
    let mut first = Dispatcher::try_new(&conn).unwrap();
    let mut second = Dispatcher::try_new(&conn).unwrap();

    let create = ApiRequest::new(Verb::Post, "/api/medications", "u1")
        .with_body(json!({"name": "Metformin", "userId": "u1"}));
    let ApiResponse::Record(created) = first.dispatch(&create).unwrap() else {
        panic!("create should return the stored record");
    };

    let list = ApiRequest::new(Verb::Get, "/api/medications", "u1");
    let ApiResponse::Records(records) = second.dispatch(&list).unwrap() else {
        panic!("list should return a collection");
    };
    assert!(records
        .iter()
        .any(|record| record["id"] == created["id"]));
}

#[test]
fn listing_insurance_policies_twice_never_duplicates_fixtures() {
    let conn = open_db_in_memory().unwrap();
    let mut first = Dispatcher::try_new(&conn).unwrap();
    let mut second = Dispatcher::try_new(&conn).unwrap();

    let list = ApiRequest::new(Verb::Get, "/api/insurance-policies", "demo-user");

    let ApiResponse::Records(first_pass) = first.dispatch(&list).unwrap() else {
        panic!("list should return a collection");
    };
    let store = SqliteCollectionStore::try_new(&conn).unwrap();
    let blob_after_first = store.read_blob("insurancePolicies").unwrap().unwrap();

    let ApiResponse::Records(second_pass) = second.dispatch(&list).unwrap() else {
        panic!("list should return a collection");
    };
    let blob_after_second = store.read_blob("insurancePolicies").unwrap().unwrap();

    assert_eq!(first_pass.len(), second_pass.len());
    assert_eq!(blob_after_first, blob_after_second);
}
