use carelog_core::api::{medications, ApiClient};
use carelog_core::db::open_db_in_memory;
use carelog_core::model::medication::Medication;
use rusqlite::Connection;
use std::time::Duration;

fn fast_client<'a>(conn: &'a Connection, caller_id: &str) -> ApiClient<'a> {
    ApiClient::try_new(conn, caller_id)
        .unwrap()
        .with_latency(Duration::ZERO)
}

#[test]
fn records_created_by_one_identity_never_reach_another() {
    let conn = open_db_in_memory().unwrap();
    let mut alice = fast_client(&conn, "u-alice");
    let mut bob = fast_client(&conn, "u-bob");

    let created = medications::create(&mut alice, &Medication::new("u-alice", "Metformin")).unwrap();

    // Bob runs through a separate client over the same backing store;
    // reload-before-use makes Alice's write visible, scoping hides it.
    let bob_list = medications::list(&mut bob).unwrap();
    assert!(bob_list.iter().all(|medication| medication.id != created.id));

    let alice_list = medications::list(&mut alice).unwrap();
    assert!(alice_list
        .iter()
        .any(|medication| medication.id == created.id));
}

#[test]
fn seeded_fixtures_are_shared_across_demo_identities() {
    let conn = open_db_in_memory().unwrap();
    let mut session_a = fast_client(&conn, "demo-7f3a");
    let mut session_b = fast_client(&conn, "demo-22c1");

    let list_a = medications::list(&mut session_a).unwrap();
    assert!(list_a.iter().any(|medication| medication.id == "demo-med-001"));

    let list_b = medications::list(&mut session_b).unwrap();
    assert!(list_b.iter().any(|medication| medication.id == "demo-med-001"));
}

#[test]
fn seeded_fixtures_stay_hidden_from_real_identities() {
    let conn = open_db_in_memory().unwrap();
    let mut carol = fast_client(&conn, "u-carol");

    let list = medications::list(&mut carol).unwrap();
    assert!(list
        .iter()
        .all(|medication| !medication.id.starts_with("demo-")));
}

#[test]
fn demo_sessions_cannot_see_real_user_records() {
    let conn = open_db_in_memory().unwrap();
    let mut alice = fast_client(&conn, "u-alice");
    let mut demo = fast_client(&conn, "demo-9b01");

    let created = medications::create(&mut alice, &Medication::new("u-alice", "Lisinopril")).unwrap();

    let demo_list = medications::list(&mut demo).unwrap();
    assert!(demo_list
        .iter()
        .all(|medication| medication.id != created.id));
    assert!(medications::get(&mut demo, &created.id).unwrap().is_none());
}

#[test]
fn get_by_id_applies_the_same_scoping_as_list() {
    let conn = open_db_in_memory().unwrap();
    let mut alice = fast_client(&conn, "u-alice");
    let mut bob = fast_client(&conn, "u-bob");

    let created = medications::create(&mut alice, &Medication::new("u-alice", "Metformin")).unwrap();

    assert!(medications::get(&mut alice, &created.id).unwrap().is_some());
    assert!(medications::get(&mut bob, &created.id).unwrap().is_none());
}
