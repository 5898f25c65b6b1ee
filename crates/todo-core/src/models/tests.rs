#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{IntoTodoId, IntoTodoItem, Priority, TodoId, TodoItem};

    fn create_test_todo() -> TodoItem {
        TodoItem {
            id: None,
            priority: Priority::Medium,
            name: "Write the quarterly report".to_string(),
            created: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
            due_date: Timestamp::from_second(1641081600).unwrap(), // 2022-01-02 00:00:00 UTC
            done: false,
        }
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
        assert_eq!(Priority::High.as_str(), "high");
    }

    #[test]
    fn test_todo_id_rejects_non_positive() {
        assert!(TodoId::new(0).unwrap_err().is_invalid_argument());
        assert!(TodoId::new(-3).unwrap_err().is_invalid_argument());
        assert_eq!(TodoId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn test_todo_id_from_strings() {
        assert_eq!("42".into_todo_id().unwrap().get(), 42);
        assert_eq!(" 5 ".into_todo_id().unwrap().get(), 5);
        assert!("abc".into_todo_id().unwrap_err().is_invalid_argument());
        assert!("1.5".into_todo_id().unwrap_err().is_invalid_argument());
        assert!("".into_todo_id().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_todo_id_from_json() {
        assert_eq!((&json!(9)).into_todo_id().unwrap().get(), 9);
        assert!((&json!(9.5)).into_todo_id().unwrap_err().is_invalid_argument());
        assert!((&json!("9")).into_todo_id().unwrap_err().is_invalid_argument());
        assert!((&json!(null)).into_todo_id().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_todo_id_from_u64_out_of_range() {
        assert!(u64::MAX.into_todo_id().unwrap_err().is_invalid_argument());
        assert_eq!(3u64.into_todo_id().unwrap().get(), 3);
    }

    #[test]
    fn test_todo_item_json_shape() {
        let todo = create_test_todo();
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["priority"], "medium");
        assert_eq!(value["dueDate"], "2022-01-02T00:00:00Z");
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_todo_item_from_json_object() {
        let value = json!({
            "priority": "high",
            "name": "enter a todo item via a unit test",
            "created": "2025-06-06T12:00:00Z",
            "dueDate": "2025-06-12T14:00:00Z",
            "done": false,
        });

        let todo = (&value).into_todo_item().expect("valid record");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.name, "enter a todo item via a unit test");
        assert_eq!(
            todo.due_date,
            "2025-06-12T14:00:00Z".parse::<Timestamp>().unwrap()
        );
        assert!(!todo.is_persisted());
    }

    #[test]
    fn test_todo_item_rejects_malformed_json() {
        let not_object = json!(["buy milk"]);
        assert!((&not_object).into_todo_item().unwrap_err().is_invalid_argument());

        let missing_field = json!({ "priority": "low", "name": "x", "done": false });
        assert!((&missing_field).into_todo_item().unwrap_err().is_invalid_argument());

        let wrong_type = json!({
            "priority": "low",
            "name": "x",
            "created": "2025-06-06T12:00:00Z",
            "dueDate": "2025-06-12T14:00:00Z",
            "done": "yes",
        });
        assert!((&wrong_type).into_todo_item().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_todo_item_ignores_json_id() {
        for id in [json!(0), json!(-5), json!("abc"), json!(7)] {
            let value = json!({
                "id": id,
                "priority": "low",
                "name": "x",
                "created": "2025-06-06T12:00:00Z",
                "dueDate": "2025-06-12T14:00:00Z",
                "done": false,
            });
            let todo = (&value).into_todo_item().unwrap();
            assert_eq!(todo.id, None);
        }
    }

    #[test]
    fn test_todo_item_json_accepts_civil_times() {
        let value = json!({
            "priority": "high",
            "name": "x",
            "created": "2025-06-06",
            "dueDate": "2025-06-12T14:00:00",
            "done": false,
        });
        let todo = (&value).into_todo_item().unwrap();
        assert_eq!(todo.created, "2025-06-06T00:00:00Z".parse::<Timestamp>().unwrap());
        assert_eq!(todo.due_date, "2025-06-12T14:00:00Z".parse::<Timestamp>().unwrap());
    }

    #[test]
    fn test_todo_item_json_errors_name_one_field() {
        let value = json!({
            "priority": "low",
            "name": "x",
            "created": "2025-06-06T12:00:00Z",
            "dueDate": "someday",
            "done": false,
        });
        let message = (&value).into_todo_item().unwrap_err().to_string();
        assert!(message.starts_with("Invalid argument 'dueDate': "));
        assert_eq!(message.matches("Invalid argument").count(), 1);
    }
}
