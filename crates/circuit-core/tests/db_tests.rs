use circuit_core::{
    db::migrations::SCHEMA_VERSION, BenchError, Catalog, Database, InstallationDetails,
    ResultEntry, ResultStatus, SessionController, SessionRecord, SessionStatus, Technician,
    TestSession,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_session(address: &str) -> TestSession {
    SessionController::start(
        &Catalog::builtin(),
        InstallationDetails {
            address: address.to_string(),
            client: Some("Test Client".to_string()),
            description: None,
        },
        Technician {
            name: "Test Technician".to_string(),
            registration: Some("ECS 998877".to_string()),
        },
    )
    .expect("Failed to start session")
    .into_session()
}

#[test]
fn test_database_initialization() {
    let (temp_file, db) = create_test_db();

    assert!(temp_file.path().exists());
    assert_eq!(db.schema_version().unwrap(), SCHEMA_VERSION);
}

#[test]
fn test_reopen_existing_database() {
    let (temp_file, mut db) = create_test_db();
    let record = db.insert_session(new_session("1 Test Street")).unwrap();
    drop(db);

    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert!(db.get_session(record.id).unwrap().is_some());
}

#[test]
fn test_insert_and_get_session() {
    let (_temp_file, mut db) = create_test_db();

    let record = db
        .insert_session(new_session("1 Test Street"))
        .expect("Failed to insert session");
    assert!(record.id > 0);
    assert_eq!(record.version, 1);

    let loaded = db
        .get_session(record.id)
        .expect("Failed to get session")
        .expect("Session should exist");

    assert_eq!(loaded.id, record.id);
    assert_eq!(loaded.version, 1);
    assert_eq!(loaded.session, record.session);
    assert_eq!(loaded.session.installation().client.as_deref(), Some("Test Client"));
}

#[test]
fn test_get_missing_session() {
    let (_temp_file, db) = create_test_db();
    assert!(db.get_session(42).unwrap().is_none());
}

#[test]
fn test_save_session_persists_changes_and_bumps_version() {
    let (_temp_file, mut db) = create_test_db();
    let record = db.insert_session(new_session("1 Test Street")).unwrap();

    let mut controller = SessionController::resume(record.session.clone());
    controller
        .record_result(
            "insulation-resistance",
            ResultEntry::new(ResultStatus::Completed).with_measurement(">299", "MΩ"),
        )
        .unwrap();
    controller.next_step();
    controller.next_step();

    let saved = db
        .save_session(SessionRecord {
            session: controller.into_session(),
            ..record
        })
        .expect("Failed to save session");
    assert_eq!(saved.version, 2);

    let loaded = db.get_session(saved.id).unwrap().unwrap();
    assert_eq!(loaded.version, 2);
    assert_eq!(loaded.session.current_step_index(), 2);
    let result = loaded
        .session
        .result_for("insulation-resistance")
        .expect("Result should be stored");
    assert_eq!(result.value.as_deref(), Some(">299"));
    assert_eq!(result.unit.as_deref(), Some("MΩ"));
}

#[test]
fn test_recording_again_replaces_stored_result() {
    let (_temp_file, mut db) = create_test_db();
    let record = db.insert_session(new_session("1 Test Street")).unwrap();

    let mut controller = SessionController::resume(record.session.clone());
    controller
        .record_result(
            "polarity",
            ResultEntry::new(ResultStatus::Failed).with_notes("Reversed at socket 3"),
        )
        .unwrap();
    let saved = db
        .save_session(SessionRecord {
            session: controller.into_session(),
            ..record
        })
        .unwrap();

    let mut controller = SessionController::resume(saved.session.clone());
    controller
        .record_result("polarity", ResultEntry::new(ResultStatus::Completed))
        .unwrap();
    let saved = db
        .save_session(SessionRecord {
            session: controller.into_session(),
            ..saved
        })
        .unwrap();

    let loaded = db.get_session(saved.id).unwrap().unwrap();
    assert_eq!(loaded.session.results().len(), 1);
    let result = loaded.session.result_for("polarity").unwrap();
    assert_eq!(result.status, ResultStatus::Completed);
    assert_eq!(result.notes, None);
}

#[test]
fn test_stale_save_is_a_version_conflict() {
    let (_temp_file, mut db) = create_test_db();
    let record = db.insert_session(new_session("1 Test Street")).unwrap();
    let stale = record.clone();

    db.save_session(record).expect("First save should succeed");

    let err = db.save_session(stale).unwrap_err();
    match err {
        BenchError::VersionConflict { expected, .. } => assert_eq!(expected, 1),
        other => panic!("Expected VersionConflict error, got {other:?}"),
    }
}

#[test]
fn test_save_deleted_session_is_not_found() {
    let (_temp_file, mut db) = create_test_db();
    let record = db.insert_session(new_session("1 Test Street")).unwrap();
    let id = record.id;

    db.delete_session(id).unwrap();
    assert!(matches!(
        db.save_session(record),
        Err(BenchError::SessionNotFound { id: missing }) if missing == id
    ));
}

#[test]
fn test_list_sessions_by_status() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.insert_session(new_session("1 Test Street")).unwrap();
    let second = db.insert_session(new_session("2 Test Street")).unwrap();
    let third = db.insert_session(new_session("3 Test Street")).unwrap();

    let mut controller = SessionController::resume(second.session.clone());
    controller.complete();
    db.save_session(SessionRecord {
        session: controller.into_session(),
        ..second
    })
    .unwrap();

    let in_progress = db.list_sessions(SessionStatus::InProgress).unwrap();
    let ids: Vec<u64> = in_progress.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![third.id, first.id]);
    assert_eq!(in_progress[0].address, "3 Test Street");
    assert_eq!(in_progress[0].technician, "Test Technician");
    assert_eq!(in_progress[0].progress.total, 7);

    let completed = db.list_sessions(SessionStatus::Completed).unwrap();
    assert_eq!(completed.len(), 1);
    assert!(completed[0].completed_at.is_some());
}

#[test]
fn test_delete_session() {
    let (_temp_file, mut db) = create_test_db();
    let record = db.insert_session(new_session("1 Test Street")).unwrap();

    let mut controller = SessionController::resume(record.session.clone());
    controller
        .record_result("continuity", ResultEntry::new(ResultStatus::Completed))
        .unwrap();
    let saved = db
        .save_session(SessionRecord {
            session: controller.into_session(),
            ..record
        })
        .unwrap();

    let deleted = db
        .delete_session(saved.id)
        .expect("Failed to delete session")
        .expect("Session should have existed");
    assert_eq!(deleted.session.results().len(), 1);

    assert!(db.get_session(saved.id).unwrap().is_none());
    assert!(db.delete_session(saved.id).unwrap().is_none());
}
