use crate::{
    error::Result,
    models::{NewTask, Task},
};
use async_trait::async_trait;

/// Repository trait for task persistence and retrieval.
///
/// Implementations must be safe for concurrent use; the handle behind them
/// is created once at process start and shared by every in-flight request.
/// Each method issues exactly one statement against the store; there are
/// no auxiliary existence queries, so absence is always derived from the
/// statement's own result (scanned id, affected-row count).
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Fetch every task, in whatever order the store returns rows.
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - all tasks, possibly empty
    /// * `Err(TaskError::Query)` - the statement could not be executed
    /// * `Err(TaskError::Scan)` - a row could not be decoded
    async fn list(&self) -> Result<Vec<Task>>;

    /// Fetch a single task by id.
    ///
    /// Absence is detected by the scanned id remaining at its zero value
    /// after the result rows are consumed, not by counting rows.
    ///
    /// # Returns
    /// * `Ok(Some(Task))` - the task if found
    /// * `Ok(None)` - no row matched the id
    /// * `Err(TaskError::Query)` - the statement could not be executed
    /// * `Err(TaskError::Scan)` - the row could not be decoded
    async fn get_by_id(&self, id: i32) -> Result<Option<Task>>;

    /// Case-insensitive substring search over titles.
    ///
    /// The term is trimmed and wrapped in wildcard markers server-side and
    /// bound as a parameter; it is never concatenated into SQL text.
    ///
    /// # Returns
    /// * `Ok(Vec<Task>)` - matching tasks, possibly empty
    /// * `Err(TaskError::Validation)` - the term is blank
    /// * `Err(TaskError::Query)` - the statement could not be executed
    /// * `Err(TaskError::Scan)` - a row could not be decoded
    async fn search_by_title(&self, term: &str) -> Result<Vec<Task>>;

    /// Insert a task; the store assigns the id.
    ///
    /// # Returns
    /// * `Ok(Task)` - the created task with its assigned id
    /// * `Err(TaskError::Validation)` - the title is blank
    /// * `Err(TaskError::Insert)` - the statement failed
    async fn create(&self, task: NewTask) -> Result<Task>;

    /// Overwrite every column of the task with `id`.
    ///
    /// Absence is derived from the affected-row count reported by the
    /// store; the count is authoritative.
    ///
    /// # Returns
    /// * `Ok(())` - exactly the matched row was rewritten
    /// * `Err(TaskError::NotFound)` - zero rows were affected
    /// * `Err(TaskError::Validation)` - the title is blank
    /// * `Err(TaskError::Exec)` - the statement failed
    async fn update(&self, id: i32, task: NewTask) -> Result<()>;

    /// Delete the task with `id`.
    ///
    /// # Returns
    /// * `Ok(())` - the row was removed
    /// * `Err(TaskError::NotFound)` - zero rows were affected
    /// * `Err(TaskError::Delete)` - the statement failed
    async fn delete(&self, id: i32) -> Result<()>;
}
