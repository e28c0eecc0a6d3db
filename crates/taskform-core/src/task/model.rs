//! Task domain model.
//!
//! Tasks are owned by the server; this side only builds creation requests and
//! renders what the listing endpoints return.

use serde::{Deserialize, Serialize};

/// Well-known status value for a task that is still open.
pub const STATUS_NOT_DONE: &str = "not_done";
/// Well-known status value for a finished task.
pub const STATUS_DONE: &str = "done";

/// A task as the server reports it.
///
/// The status is a free string on the wire; [`STATUS_NOT_DONE`] and
/// [`STATUS_DONE`] are the values the server is known to emit, but nothing
/// here validates against them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier. Some responses omit it.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub status: String,
}

/// Body of a task-creation request. Built from one form field, sent once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_deserializes_without_id() {
        let task: Task = serde_json::from_str(r#"{"name":"Buy milk","status":"open"}"#).unwrap();
        assert_eq!(task.id, 0);
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.status, "open");
    }

    #[test]
    fn test_task_list_preserves_order() {
        let body = r#"[
            {"id":2,"name":"File taxes","status":"done"},
            {"id":1,"name":"Buy milk","status":"not_done"}
        ]"#;
        let tasks: Vec<Task> = serde_json::from_str(body).unwrap();
        assert_eq!(tasks[0].name, "File taxes");
        assert_eq!(tasks[1].status, STATUS_NOT_DONE);
    }

    #[test]
    fn test_new_task_serializes_name_only() {
        let body = serde_json::to_value(NewTask {
            name: "wash the car".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "wash the car"}));
    }
}
