use serde::Serialize;
use thiserror::Error;

/// Result type alias for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Failure modes of the task access layer.
///
/// Variants are keyed by the phase that failed, because the phase decides
/// the HTTP status: rejected input and failed read/delete statements answer
/// 400, absent rows answer 404, and failures while consuming results or
/// running insert/update statements answer 500. The driver's own message is
/// carried verbatim and relayed to the caller in the `details` field of the
/// error body.
///
/// # Examples
///
/// ```rust
/// use tarefas_core::error::TaskError;
///
/// let err = TaskError::blank_field("title");
/// assert!(err.is_validation());
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(TaskError::NotFound.status_code(), 404);
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// No task matched the requested id or search term
    #[error("Task not found")]
    NotFound,

    /// Rejected input; the payload names the violated constraint
    #[error("Invalid data")]
    Validation(String),

    /// A read statement could not be executed
    #[error("Invalid request data")]
    Query(String),

    /// A result row could not be decoded into a task
    #[error("Error reading tasks from the database")]
    Scan(String),

    /// The insert statement failed
    #[error("Error creating task")]
    Insert(String),

    /// The update statement failed
    #[error("Error updating task")]
    Exec(String),

    /// The delete statement failed
    #[error("Error deleting task")]
    Delete(String),

    /// The store could not be opened or its schema prepared
    #[error("Database connection error")]
    Connection(String),
}

impl TaskError {
    /// Create a validation error for a blank required field
    pub fn blank_field(field: &str) -> Self {
        Self::Validation(format!("Field '{field}' is empty or was not filled."))
    }

    /// Create a validation error for a blank search term
    pub fn blank_search_term() -> Self {
        Self::Validation("The 'titulo' query parameter is empty or was not filled.".to_string())
    }

    /// Check if this error indicates a not found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskError::NotFound)
    }

    /// Check if this error indicates a validation problem
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::Validation(_))
    }

    /// Details relayed to the client alongside the error message, when any
    pub fn details(&self) -> Option<&str> {
        match self {
            TaskError::NotFound => None,
            TaskError::Validation(d)
            | TaskError::Query(d)
            | TaskError::Scan(d)
            | TaskError::Insert(d)
            | TaskError::Exec(d)
            | TaskError::Delete(d)
            | TaskError::Connection(d) => Some(d),
        }
    }

    /// HTTP status code this error maps to
    pub fn status_code(&self) -> u16 {
        match self {
            TaskError::NotFound => 404,
            TaskError::Validation(_) | TaskError::Query(_) | TaskError::Delete(_) => 400,
            TaskError::Scan(_)
            | TaskError::Insert(_)
            | TaskError::Exec(_)
            | TaskError::Connection(_) => 500,
        }
    }
}

/// Wire shape of every error response: `{"error": …, "details"?: …}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&TaskError> for ErrorBody {
    fn from(err: &TaskError) -> Self {
        Self {
            error: err.to_string(),
            details: err.details().map(str::to_string),
        }
    }
}
