//! Tests for the todo repository against a scripted session.

use std::{cell::RefCell, collections::VecDeque};

use jiff::Timestamp;
use serde_json::json;

use super::*;
use crate::session::{BindDirection, Execution};

/// Session double that records every statement and replays canned results.
#[derive(Default)]
struct ScriptedSession {
    calls: RefCell<Vec<(String, Binds)>>,
    responses: RefCell<VecDeque<Execution>>,
}

impl ScriptedSession {
    fn respond(self, execution: Execution) -> Self {
        self.responses.borrow_mut().push_back(execution);
        self
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Session for ScriptedSession {
    fn execute(&self, sql: &str, binds: &Binds) -> Result<Execution> {
        self.calls
            .borrow_mut()
            .push((sql.to_string(), binds.clone()));
        Ok(self.responses.borrow_mut().pop_front().unwrap_or_default())
    }
}

fn affected(rows_affected: u64) -> Execution {
    Execution {
        rows_affected,
        ..Default::default()
    }
}

fn create_test_todo() -> TodoItem {
    TodoItem::new(
        "buy milk",
        Priority::Low,
        "2025-01-01T00:00:00Z".parse::<Timestamp>().unwrap(),
        "2025-01-02T00:00:00Z".parse::<Timestamp>().unwrap(),
    )
}

#[test]
fn test_invalid_keys_never_reach_the_session() {
    let session = ScriptedSession::default();
    let repo = TodoRepository::new(&session);

    assert!(repo.read("abc").unwrap_err().is_invalid_argument());
    assert!(repo.read(0i64).unwrap_err().is_invalid_argument());
    assert!(repo
        .update(&json!("1"), create_test_todo())
        .unwrap_err()
        .is_invalid_argument());
    assert!(repo.delete(-1i64).unwrap_err().is_invalid_argument());
    assert!(repo.delete(&json!(1.5)).unwrap_err().is_invalid_argument());

    assert_eq!(session.call_count(), 0);
}

#[test]
fn test_malformed_records_never_reach_the_session() {
    let session = ScriptedSession::default();
    let repo = TodoRepository::new(&session);

    assert!(repo
        .create(&json!("buy milk"))
        .unwrap_err()
        .is_invalid_argument());
    assert!(repo
        .update(1i64, &json!({ "name": "buy milk" }))
        .unwrap_err()
        .is_invalid_argument());

    assert_eq!(session.call_count(), 0);
}

#[test]
fn test_create_binds_every_field_and_requests_the_key() {
    let mut out_binds = std::collections::HashMap::new();
    out_binds.insert("id".to_string(), Value::Integer(17));
    let session = ScriptedSession::default().respond(Execution {
        rows_affected: 1,
        rows: Vec::new(),
        out_binds,
    });
    let repo = TodoRepository::new(&session);

    let id = repo.create(create_test_todo()).expect("Failed to create todo");
    assert_eq!(id.get(), 17);

    let calls = session.calls.borrow();
    let (sql, binds) = &calls[0];
    assert!(sql.starts_with("INSERT INTO todos"));
    for field in ["priority", "name", "created", "due_date", "done"] {
        assert_eq!(
            binds.get(field).map(|b| b.direction),
            Some(BindDirection::In),
            "missing input bind for {field}"
        );
    }
    assert_eq!(binds.get("id").map(|b| b.direction), Some(BindDirection::Out));
    assert_eq!(
        binds.get("name").and_then(|b| b.value.clone()),
        Some(Value::from("buy milk"))
    );
}

#[test]
fn test_create_ignores_caller_supplied_id() {
    let mut out_binds = std::collections::HashMap::new();
    out_binds.insert("id".to_string(), Value::Integer(3));
    let session = ScriptedSession::default().respond(Execution {
        rows_affected: 1,
        rows: Vec::new(),
        out_binds,
    });
    let repo = TodoRepository::new(&session);

    let mut todo = create_test_todo();
    todo.id = Some(TodoId::new(99).unwrap());

    assert_eq!(repo.create(todo).unwrap().get(), 3);
}

#[test]
fn test_create_fails_when_row_count_is_not_one() {
    for rows_affected in [0, 2] {
        let session = ScriptedSession::default().respond(affected(rows_affected));
        let repo = TodoRepository::new(&session);

        match repo.create(create_test_todo()) {
            Err(TodoError::OperationFailed { .. }) => {}
            other => panic!("expected OperationFailed, got {other:?}"),
        }
    }
}

#[test]
fn test_create_fails_without_generated_key() {
    let session = ScriptedSession::default().respond(affected(1));
    let repo = TodoRepository::new(&session);

    match repo.create(create_test_todo()) {
        Err(TodoError::OperationFailed { message }) => {
            assert!(message.contains("generated id"))
        }
        other => panic!("expected OperationFailed, got {other:?}"),
    }
}

#[test]
fn test_read_maps_upper_case_columns() {
    let row = Row::new(vec![
        ("ID".to_string(), Value::Integer(5)),
        ("PRIORITY".to_string(), Value::from("high")),
        ("NAME".to_string(), Value::from("file taxes")),
        (
            "CREATED".to_string(),
            Value::from("2025-06-06T12:00:00Z".parse::<Timestamp>().unwrap()),
        ),
        ("DUE_DATE".to_string(), Value::from("2025-06-12T14:00:00Z")),
        ("DONE".to_string(), Value::Boolean(true)),
    ]);
    let session = ScriptedSession::default().respond(Execution {
        rows: vec![row],
        ..Default::default()
    });
    let repo = TodoRepository::new(&session);

    let todo = repo.read(5i64).expect("Failed to read todo");
    assert_eq!(todo.id, Some(TodoId::new(5).unwrap()));
    assert_eq!(todo.priority, Priority::High);
    assert_eq!(todo.name, "file taxes");
    assert_eq!(
        todo.due_date,
        "2025-06-12T14:00:00Z".parse::<Timestamp>().unwrap()
    );
    assert!(todo.done);
}

#[test]
fn test_read_rejects_corrupt_rows() {
    let row = Row::new(vec![
        ("id".to_string(), Value::Integer(5)),
        ("priority".to_string(), Value::from("urgent")),
        ("name".to_string(), Value::from("x")),
        ("created".to_string(), Value::from("2025-06-06T12:00:00Z")),
        ("due_date".to_string(), Value::from("2025-06-12T14:00:00Z")),
        ("done".to_string(), Value::Integer(0)),
    ]);
    let session = ScriptedSession::default().respond(Execution {
        rows: vec![row],
        ..Default::default()
    });
    let repo = TodoRepository::new(&session);

    match repo.read(5i64) {
        Err(TodoError::InvalidData { column, .. }) => assert_eq!(column, "priority"),
        other => panic!("expected InvalidData, got {other:?}"),
    }
}

#[test]
fn test_read_without_rows_is_not_found() {
    let session = ScriptedSession::default();
    let repo = TodoRepository::new(&session);

    match repo.read(8i64) {
        Err(TodoError::NotFound { id }) => assert_eq!(id, 8),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_update_missing_key_returns_false() {
    let session = ScriptedSession::default().respond(affected(0));
    let repo = TodoRepository::new(&session);

    assert!(!repo.update(4i64, create_test_todo()).unwrap());

    let calls = session.calls.borrow();
    let (sql, binds) = &calls[0];
    assert!(sql.starts_with("UPDATE todos"));
    assert_eq!(
        binds.get("id").and_then(|b| b.value.clone()),
        Some(Value::Integer(4))
    );
}

#[test]
fn test_update_one_row_returns_true() {
    let session = ScriptedSession::default().respond(affected(1));
    let repo = TodoRepository::new(&session);

    assert!(repo.update("4", create_test_todo()).unwrap());
}

#[test]
fn test_delete_missing_key_is_not_found() {
    let session = ScriptedSession::default().respond(affected(0));
    let repo = TodoRepository::new(&session);

    let err = repo.delete(12i64).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("12"));
}

#[test]
fn test_delete_one_row_succeeds() {
    let session = ScriptedSession::default().respond(affected(1));
    let repo = TodoRepository::new(&session);

    repo.delete(12i64).expect("Failed to delete todo");
    assert_eq!(session.call_count(), 1);
}
