use serde::{Deserialize, Serialize};

/// A task record as persisted in the `tasks` table and exchanged with
/// clients.
///
/// The `id` is assigned by the store on creation and is immutable
/// afterwards; before creation it holds the zero value. Read operations
/// rely on that: a scanned task whose `id` is still zero after the result
/// rows are consumed was never matched by the store.
///
/// Field names follow the wire and column contract (`descricao` rather
/// than `description`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Store-assigned primary key; zero until the row exists
    #[serde(default)]
    pub id: i32,
    /// Task title, required non-blank on creation and update
    pub title: String,
    /// Free-form description, optional
    #[serde(default)]
    pub descricao: String,
    /// Status label, passed through verbatim
    #[serde(default)]
    pub status: String,
}

impl Task {
    /// True once the store has assigned an id.
    ///
    /// A store handing out id 0 would make this report a persisted row as
    /// missing; the shipped schema starts ids at 1.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// Payload decoded from create and update request bodies.
///
/// Update overwrites every column with these fields; there are no partial
/// updates. A missing `title` fails deserialization, so a body without one
/// is rejected before it reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub descricao: String,
    #[serde(default)]
    pub status: String,
}

impl NewTask {
    pub fn new(
        title: impl Into<String>,
        descricao: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            descricao: descricao.into(),
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_task_is_not_persisted() {
        let task = Task::default();
        assert_eq!(task.id, 0);
        assert!(!task.is_persisted());

        let task = Task { id: 1, ..Task::default() };
        assert!(task.is_persisted());
    }

    #[test]
    fn test_payload_optional_fields_default_to_empty() {
        let payload: NewTask = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.descricao, "");
        assert_eq!(payload.status, "");
    }

    #[test]
    fn test_payload_without_title_is_rejected() {
        let result: std::result::Result<NewTask, _> =
            serde_json::from_str(r#"{"descricao":"2%","status":"open"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_task_serialization_round_trip() {
        let task = Task {
            id: 7,
            title: "Buy milk".to_string(),
            descricao: "2%".to_string(),
            status: "open".to_string(),
        };

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains(r#""id":7"#));
        assert!(json.contains(r#""descricao":"2%""#));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
