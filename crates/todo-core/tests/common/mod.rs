use jiff::Timestamp;
use tempfile::NamedTempFile;
use todo_core::{Priority, SqliteSession, TodoItem};

/// Helper function to create a session on a temporary database file
pub fn create_test_session() -> (NamedTempFile, SqliteSession) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let session = SqliteSession::open(temp_file.path()).expect("Failed to open test database");
    (temp_file, session)
}

/// The todo item used throughout the scenario tests
#[allow(dead_code)]
pub fn buy_milk() -> TodoItem {
    TodoItem::new(
        "buy milk",
        Priority::Low,
        "2025-01-01T00:00:00Z".parse::<Timestamp>().unwrap(),
        "2025-01-02T00:00:00Z".parse::<Timestamp>().unwrap(),
    )
}
