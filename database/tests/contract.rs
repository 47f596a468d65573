//! Contract tests every TaskRepository implementation must pass.
//!
//! The same suite runs against the SQLite store and the in-memory mock so
//! the two stay interchangeable behind the trait: absence signalled through
//! the store's own result (never an extra existence query), blank-input
//! validation, and full-overwrite update semantics.

use std::sync::Arc;
use tarefas_database::{NewTask, SqliteTaskRepository, TaskRepository};
use tarefas_mocks::MockTaskRepository;

async fn run_contract<R: TaskRepository>(repo: Arc<R>) {
    test_create_and_get(repo.clone()).await;
    test_absence_signals(repo.clone()).await;
    test_blank_inputs(repo.clone()).await;
    test_search(repo.clone()).await;
    test_full_overwrite(repo.clone()).await;
}

async fn test_create_and_get<R: TaskRepository>(repo: Arc<R>) {
    let created = repo
        .create(NewTask::new("Contract create", "desc", "open"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.title, "Contract create");

    let fetched = repo.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

async fn test_absence_signals<R: TaskRepository>(repo: Arc<R>) {
    // Absent id reads back as None, not an error
    assert_eq!(repo.get_by_id(987_654).await.unwrap(), None);

    // Zero affected rows surface as not-found
    assert!(repo
        .update(987_654, NewTask::new("x", "", ""))
        .await
        .unwrap_err()
        .is_not_found());
    assert!(repo.delete(987_654).await.unwrap_err().is_not_found());
}

async fn test_blank_inputs<R: TaskRepository>(repo: Arc<R>) {
    assert!(repo
        .create(NewTask::new("  ", "", ""))
        .await
        .unwrap_err()
        .is_validation());
    assert!(repo.search_by_title(" \t ").await.unwrap_err().is_validation());
}

async fn test_search<R: TaskRepository>(repo: Arc<R>) {
    repo.create(NewTask::new("Contract SEARCH target", "", ""))
        .await
        .unwrap();

    let found = repo.search_by_title("search target").await.unwrap();
    assert_eq!(found.len(), 1);

    assert!(repo
        .search_by_title("contract-no-such-title")
        .await
        .unwrap()
        .is_empty());
}

async fn test_full_overwrite<R: TaskRepository>(repo: Arc<R>) {
    let created = repo
        .create(NewTask::new("Contract update", "before", "open"))
        .await
        .unwrap();

    repo.update(created.id, NewTask::new("Contract update", "", "done"))
        .await
        .unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.descricao, "");
    assert_eq!(fetched.status, "done");
}

#[tokio::test]
async fn test_sqlite_repository_contract() {
    let repo = SqliteTaskRepository::connect(":memory:", 1).await.unwrap();
    repo.migrate().await.unwrap();
    run_contract(Arc::new(repo)).await;
}

#[tokio::test]
async fn test_mock_repository_contract() {
    run_contract(Arc::new(MockTaskRepository::new())).await;
}
