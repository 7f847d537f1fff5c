use menkyo_database::*;
use serde::{Deserialize, Serialize};

#[tokio::test]
async fn connect_in_memory_and_health_check() {
    let db = Database::builder()
        .url("mem://")
        .project("test_project")
        .database("test_db")
        .init()
        .await
        .expect("connect to mem://");

    // Health should be OK for mem://
    db.health().await.expect("health check");
    db.use_ns("test_project").use_db("test_db").await.expect("session switch");
    assert_eq!(db.project(), "test_project");
}

#[tokio::test]
async fn missing_parameters_fail_validation() {
    let err = Database::builder().init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));

    let err = Database::builder().url("mem://").init().await.unwrap_err();
    assert!(matches!(err, DatabaseError::Validation { .. }));
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Note {
    title: String,
}

#[tokio::test]
async fn records_survive_a_create_select_cycle() {
    let db = Database::builder()
        .url("mem://")
        .project("test_project")
        .database("notes")
        .init()
        .await
        .expect("connect to mem://");

    let note = Note { title: "first".to_owned() };
    let created: Option<Note> =
        db.create(("note", "first")).content(note.clone()).await.expect("create record");
    assert_eq!(created, Some(note.clone()));

    let notes: Vec<Note> = db.select("note").await.expect("select all records");
    assert_eq!(notes, vec![note]);
}
