//! Tests for the session controller.

use proptest::prelude::*;

use super::*;
use crate::models::{ResultStatus, TestCategory};

fn create_test_step(id: &str) -> TestStep {
    TestStep {
        id: id.to_string(),
        title: format!("Step {id}"),
        description: String::new(),
        category: TestCategory::Continuity,
        test_type: "dead".to_string(),
        instructions: vec![],
        safety_warnings: vec![],
        required_equipment: vec![],
        estimated_time: None,
    }
}

fn catalog_of(ids: &[&str]) -> Vec<TestStep> {
    ids.iter().map(|id| create_test_step(id)).collect()
}

fn start(ids: &[&str]) -> SessionController {
    SessionController::start(
        &catalog_of(ids),
        InstallationDetails {
            address: "1 Test Street".to_string(),
            ..Default::default()
        },
        Technician {
            name: "Test Technician".to_string(),
            registration: Some("NICEIC 12345".to_string()),
        },
    )
    .expect("Failed to start session")
}

#[test]
fn test_start_initial_state() {
    let controller = start(&["A", "B", "C"]);
    let session = controller.session();

    assert_eq!(session.current_step_index(), 0);
    assert!(session.results().is_empty());
    assert_eq!(session.status(), SessionStatus::InProgress);
    assert_eq!(session.steps().len(), 3);
    assert_eq!(session.installation().address, "1 Test Street");
    assert_eq!(session.technician().name, "Test Technician");
    assert_eq!(session.completed_at(), None);
}

#[test]
fn test_start_empty_catalog_fails() {
    let result = SessionController::start(
        &Vec::<TestStep>::new(),
        InstallationDetails::default(),
        Technician::default(),
    );
    assert!(matches!(result, Err(BenchError::EmptyCatalog)));
}

#[test]
fn test_next_step_clamps_at_last_step() {
    let mut controller = start(&["A", "B", "C"]);

    controller.next_step();
    controller.next_step();
    assert_eq!(controller.session().current_step_index(), 2);

    controller.next_step();
    assert_eq!(controller.session().current_step_index(), 2);
    assert_eq!(controller.session().current_step().id, "C");
}

#[test]
fn test_previous_step_clamps_at_first_step() {
    let mut controller = start(&["A", "B", "C"]);

    controller.previous_step();
    assert_eq!(controller.session().current_step_index(), 0);

    controller.next_step();
    controller.previous_step();
    assert_eq!(controller.session().current_step_index(), 0);
}

#[test]
fn test_single_step_session_never_moves() {
    let mut controller = start(&["only"]);
    controller.next_step();
    controller.previous_step();
    assert_eq!(controller.session().current_step_index(), 0);
}

#[test]
fn test_record_result_sets_timestamp_and_annotations() {
    let mut controller = start(&["A", "B", "C"]);
    let before = Timestamp::now();

    let session = controller
        .record_result(
            "B",
            ResultEntry::new(ResultStatus::Completed).with_measurement("1.2", "MΩ"),
        )
        .expect("Failed to record result");

    let result = session.result_for("B").expect("Result should be recorded");
    assert_eq!(result.status, ResultStatus::Completed);
    assert_eq!(result.value.as_deref(), Some("1.2"));
    assert_eq!(result.unit.as_deref(), Some("MΩ"));
    assert!(result.timestamp >= before);
}

#[test]
fn test_record_result_replaces_previous() {
    let mut controller = start(&["A", "B", "C"]);

    controller
        .record_result(
            "B",
            ResultEntry::new(ResultStatus::Completed).with_measurement("1.2", "MΩ"),
        )
        .unwrap();
    controller
        .record_result("B", ResultEntry::new(ResultStatus::Failed))
        .unwrap();

    let session = controller.session();
    assert_eq!(session.results().len(), 1);
    let result = session.result_for("B").unwrap();
    assert_eq!(result.status, ResultStatus::Failed);
    assert_eq!(result.value, None);
    assert_eq!(result.unit, None);
}

#[test]
fn test_record_result_does_not_move_index() {
    let mut controller = start(&["A", "B", "C"]);
    controller
        .record_result("C", ResultEntry::new(ResultStatus::Completed))
        .unwrap();
    assert_eq!(controller.session().current_step_index(), 0);
}

#[test]
fn test_record_result_unknown_step() {
    let mut controller = start(&["A", "B", "C"]);

    let err = controller
        .record_result("Z", ResultEntry::new(ResultStatus::Completed))
        .unwrap_err();

    match err {
        BenchError::UnknownStep { step_id } => assert_eq!(step_id, "Z"),
        other => panic!("Expected UnknownStep error, got {other:?}"),
    }
    assert!(controller.session().results().is_empty());
}

#[test]
fn test_derived_counts_scenario() {
    let mut controller = start(&["A", "B", "C"]);
    controller
        .record_result("A", ResultEntry::new(ResultStatus::Completed))
        .unwrap();
    controller
        .record_result("B", ResultEntry::new(ResultStatus::Failed))
        .unwrap();

    let session = controller.session();
    assert_eq!(session.completed_steps(), 1);
    assert_eq!(session.failed_steps(), 1);
    assert_eq!(session.remaining_steps(), 1);
}

#[test]
fn test_complete_with_no_results() {
    let mut controller = start(&["A", "B", "C"]);

    let session = controller.complete();
    assert_eq!(session.status(), SessionStatus::Completed);
    assert!(session.completed_at().is_some());
    assert_eq!(session.remaining_steps(), 3);
}

#[test]
fn test_reaching_last_step_does_not_complete() {
    let mut controller = start(&["A", "B"]);
    controller.next_step();
    controller
        .record_result("B", ResultEntry::new(ResultStatus::Completed))
        .unwrap();
    assert_eq!(controller.session().status(), SessionStatus::InProgress);
}

#[test]
fn test_complete_is_terminal_and_keeps_first_timestamp() {
    let mut controller = start(&["A"]);
    let first = controller.complete().completed_at();

    controller.next_step();
    controller.previous_step();
    let session = controller.complete();

    assert_eq!(session.status(), SessionStatus::Completed);
    assert_eq!(session.completed_at(), first);
}

#[test]
fn test_catalog_snapshot_isolated_from_caller() {
    let mut catalog = catalog_of(&["A", "B", "C"]);
    let controller = SessionController::start(
        &catalog,
        InstallationDetails::default(),
        Technician::default(),
    )
    .unwrap();

    catalog[0].title = "Changed".to_string();
    catalog.push(create_test_step("D"));
    catalog.remove(1);

    let steps = controller.session().steps();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].title, "Step A");
    assert_eq!(steps[1].id, "B");
}

#[test]
fn test_resume_round_trip() {
    let mut controller = start(&["A", "B"]);
    controller.next_step();
    let session = controller.into_session();

    let mut resumed = SessionController::resume(session);
    resumed.previous_step();
    assert_eq!(resumed.session().current_step_index(), 0);
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Next,
    Previous,
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(prop_oneof![Just(Move::Next), Just(Move::Previous)], 0..64)
}

fn outcomes() -> impl Strategy<Value = Vec<(usize, bool)>> {
    prop::collection::vec((0usize..8, any::<bool>()), 0..32)
}

proptest! {
    #[test]
    fn index_stays_in_bounds(step_count in 1usize..8, sequence in moves()) {
        let ids: Vec<String> = (0..step_count).map(|i| format!("s{i}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut controller = start(&id_refs);

        for movement in sequence {
            let before = controller.session().current_step_index();
            let after = match movement {
                Move::Next => controller.next_step().current_step_index(),
                Move::Previous => controller.previous_step().current_step_index(),
            };
            prop_assert!(after < step_count);
            match movement {
                Move::Next if before == step_count - 1 => prop_assert_eq!(after, before),
                Move::Next => prop_assert_eq!(after, before + 1),
                Move::Previous if before == 0 => prop_assert_eq!(after, 0),
                Move::Previous => prop_assert_eq!(after, before - 1),
            }
        }
    }

    #[test]
    fn derived_counts_always_sum_to_total(step_count in 1usize..8, recorded in outcomes()) {
        let ids: Vec<String> = (0..step_count).map(|i| format!("s{i}")).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let mut controller = start(&id_refs);

        for (index, passed) in recorded {
            let status = if passed { ResultStatus::Completed } else { ResultStatus::Failed };
            let outcome = controller.record_result(&format!("s{index}"), ResultEntry::new(status));
            prop_assert_eq!(outcome.is_ok(), index < step_count);

            let session = controller.session();
            prop_assert_eq!(
                session.completed_steps() + session.failed_steps() + session.remaining_steps(),
                step_count
            );
            prop_assert!(session.results().len() <= step_count);
        }
    }
}
