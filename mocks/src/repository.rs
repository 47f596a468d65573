//! Mock implementation of the TaskRepository trait
//!
//! Provides a thread-safe in-memory repository with:
//! - Error injection capabilities
//! - Call tracking for verification
//! - The same observable contract as the SQLite store (zero-id sentinel,
//!   affected-row semantics, blank-input validation)

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
};
use tarefas_core::{NewTask, Result, Task, TaskError, TaskRepository};

/// Mock implementation of TaskRepository for testing
pub struct MockTaskRepository {
    tasks: Arc<Mutex<HashMap<i32, Task>>>,
    next_id: Arc<AtomicI32>,
    error_injection: Arc<Mutex<Option<TaskError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTaskRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTaskRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock repository with pre-populated tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut task_map = HashMap::new();
        let mut max_id = 0;

        for task in tasks {
            if task.id > max_id {
                max_id = task.id;
            }
            task_map.insert(task.id, task);
        }

        Self {
            tasks: Arc::new(Mutex::new(task_map)),
            next_id: Arc::new(AtomicI32::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject an error for the next operation
    pub fn inject_error(&self, error: TaskError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear any pending error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Get the history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear the call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Assert that a method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Assert that no repository method was called
    pub fn assert_untouched(&self) {
        let history = self.call_history.lock();
        assert!(
            history.is_empty(),
            "Repository was consulted. Call history: {:?}",
            *history
        );
    }

    /// Consume a pending injected error, if any
    fn check_error_injection(&self) -> Result<()> {
        if let Some(error) = self.error_injection.lock().take() {
            return Err(error);
        }
        Ok(())
    }

    fn record_call(&self, method: &str) {
        self.call_history.lock().push(format!("{method}()"));
    }

    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        self.record_call("list");
        self.check_error_injection()?;

        let tasks = self.tasks.lock();
        let mut result: Vec<Task> = tasks.values().cloned().collect();
        result.sort_by_key(|t| t.id);
        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Task>> {
        self.record_call_with_params("get_by_id", &format!("id={id}"));
        self.check_error_injection()?;

        // Same sentinel as the SQLite store: scan into a zero-valued task
        // and report absence when the id never moved.
        let task = self.tasks.lock().get(&id).cloned().unwrap_or_default();
        if !task.is_persisted() {
            return Ok(None);
        }
        Ok(Some(task))
    }

    async fn search_by_title(&self, term: &str) -> Result<Vec<Task>> {
        self.record_call_with_params("search_by_title", &format!("term={term}"));
        self.check_error_injection()?;

        let term = term.trim();
        if term.is_empty() {
            return Err(TaskError::blank_search_term());
        }

        let needle = term.to_lowercase();
        let tasks = self.tasks.lock();
        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        result.sort_by_key(|t| t.id);
        Ok(result)
    }

    async fn create(&self, task: NewTask) -> Result<Task> {
        self.record_call_with_params("create", &format!("title={}", task.title));
        self.check_error_injection()?;

        if task.title.trim().is_empty() {
            return Err(TaskError::blank_field("title"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let new_task = Task {
            id,
            title: task.title,
            descricao: task.descricao,
            status: task.status,
        };

        self.tasks.lock().insert(id, new_task.clone());
        Ok(new_task)
    }

    async fn update(&self, id: i32, task: NewTask) -> Result<()> {
        self.record_call_with_params("update", &format!("id={id}"));
        self.check_error_injection()?;

        if task.title.trim().is_empty() {
            return Err(TaskError::blank_field("title"));
        }

        let mut tasks = self.tasks.lock();
        match tasks.get_mut(&id) {
            Some(existing) => {
                existing.title = task.title;
                existing.descricao = task.descricao;
                existing.status = task.status;
                Ok(())
            }
            None => Err(TaskError::NotFound),
        }
    }

    async fn delete(&self, id: i32) -> Result<()> {
        self.record_call_with_params("delete", &format!("id={id}"));
        self.check_error_injection()?;

        if self.tasks.lock().remove(&id).is_none() {
            return Err(TaskError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: &str) -> NewTask {
        NewTask::new(title, "", "")
    }

    #[tokio::test]
    async fn test_create_assigns_incrementing_ids() {
        let repo = MockTaskRepository::new();

        let first = repo.create(payload("one")).await.unwrap();
        let second = repo.create(payload("two")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_error_injection_is_consumed_once() {
        let repo = MockTaskRepository::new();
        repo.inject_error(TaskError::Query("boom".into()));

        assert_eq!(repo.list().await, Err(TaskError::Query("boom".into())));
        assert_eq!(repo.list().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_call_history_tracks_methods() {
        let repo = MockTaskRepository::new();
        repo.assert_untouched();

        let _ = repo.get_by_id(3).await;
        repo.assert_called("get_by_id");
        assert_eq!(repo.call_history(), vec!["get_by_id(id=3)"]);

        repo.clear_history();
        repo.assert_untouched();
    }

    #[tokio::test]
    async fn test_update_and_delete_report_absence() {
        let repo = MockTaskRepository::new();

        assert_eq!(repo.update(9, payload("x")).await, Err(TaskError::NotFound));
        assert_eq!(repo.delete(9).await, Err(TaskError::NotFound));
    }

    #[tokio::test]
    async fn test_search_matches_substring_ignoring_case() {
        let repo = MockTaskRepository::with_tasks(vec![Task {
            id: 1,
            title: "Buy milk".to_string(),
            descricao: String::new(),
            status: String::new(),
        }]);

        let found = repo.search_by_title("MILK").await.unwrap();
        assert_eq!(found.len(), 1);

        let missed = repo.search_by_title("bread").await.unwrap();
        assert!(missed.is_empty());

        assert!(repo.search_by_title("  ").await.unwrap_err().is_validation());
    }
}
