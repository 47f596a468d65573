use tarefas_database::{NewTask, SqliteTaskRepository, TaskError, TaskRepository};

async fn memory_repo() -> SqliteTaskRepository {
    let repo = SqliteTaskRepository::connect(":memory:", 1)
        .await
        .expect("in-memory database should open");
    repo.migrate().await.expect("migrations should apply");
    repo
}

fn payload(title: &str, descricao: &str, status: &str) -> NewTask {
    NewTask::new(title, descricao, status)
}

#[tokio::test]
async fn test_create_assigns_ids_starting_at_one() {
    let repo = memory_repo().await;

    let first = repo.create(payload("Buy milk", "2%", "open")).await.unwrap();
    let second = repo.create(payload("Walk dog", "", "")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.title, "Buy milk");
    assert_eq!(first.descricao, "2%");
    assert_eq!(first.status, "open");
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let repo = memory_repo().await;

    let err = repo.create(payload("   ", "", "")).await.unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.details(), Some("Field 'title' is empty or was not filled."));

    // Nothing was inserted
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_by_id_returns_created_task() {
    let repo = memory_repo().await;

    let created = repo.create(payload("Buy milk", "2%", "open")).await.unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn test_get_by_id_reports_absence_as_none() {
    let repo = memory_repo().await;

    assert_eq!(repo.get_by_id(9999).await.unwrap(), None);
}

#[tokio::test]
async fn test_list_empty_then_populated() {
    let repo = memory_repo().await;

    assert!(repo.list().await.unwrap().is_empty());

    repo.create(payload("one", "", "")).await.unwrap();
    repo.create(payload("two", "", "")).await.unwrap();

    let tasks = repo.list().await.unwrap();
    assert_eq!(tasks.len(), 2);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let repo = memory_repo().await;
    repo.create(payload("Buy milk", "", "")).await.unwrap();
    repo.create(payload("Return library books", "", "")).await.unwrap();

    let found = repo.search_by_title("MILK").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Buy milk");

    // Substring anywhere in the title
    let found = repo.search_by_title("library").await.unwrap();
    assert_eq!(found.len(), 1);

    // No match is an empty vec at this seam; the 404 mapping lives upstream
    assert!(repo.search_by_title("bread").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_trims_term_before_matching() {
    let repo = memory_repo().await;
    repo.create(payload("Buy milk", "", "")).await.unwrap();

    let found = repo.search_by_title("  milk  ").await.unwrap();
    assert_eq!(found.len(), 1);
}

#[tokio::test]
async fn test_search_rejects_blank_term() {
    let repo = memory_repo().await;

    for term in ["", "   ", "\t"] {
        let err = repo.search_by_title(term).await.unwrap_err();
        assert!(err.is_validation(), "term {term:?} should be rejected");
        assert_eq!(
            err.details(),
            Some("The 'titulo' query parameter is empty or was not filled.")
        );
    }
}

#[tokio::test]
async fn test_update_overwrites_every_column() {
    let repo = memory_repo().await;
    let created = repo.create(payload("Buy milk", "2%", "open")).await.unwrap();

    repo.update(created.id, payload("Buy milk", "2%", "done"))
        .await
        .unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.status, "done");

    // Omitted payload fields overwrite with their empty defaults: there are
    // no partial updates.
    repo.update(created.id, payload("Buy oat milk", "", ""))
        .await
        .unwrap();
    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Buy oat milk");
    assert_eq!(fetched.descricao, "");
    assert_eq!(fetched.status, "");
}

#[tokio::test]
async fn test_update_missing_id_is_not_found_and_mutates_nothing() {
    let repo = memory_repo().await;
    let created = repo.create(payload("Buy milk", "2%", "open")).await.unwrap();

    let err = repo.update(9999, payload("x", "", "")).await.unwrap_err();
    assert!(err.is_not_found());

    // The existing row is untouched and no row appeared
    let tasks = repo.list().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0], created);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let repo = memory_repo().await;
    let created = repo.create(payload("Buy milk", "", "")).await.unwrap();

    let err = repo.update(created.id, payload(" ", "", "")).await.unwrap_err();
    assert!(err.is_validation());

    let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "Buy milk");
}

#[tokio::test]
async fn test_delete_then_get_reports_absence() {
    let repo = memory_repo().await;
    let created = repo.create(payload("Buy milk", "", "")).await.unwrap();

    repo.delete(created.id).await.unwrap();
    assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);

    // A second delete finds zero rows
    assert_eq!(repo.delete(created.id).await, Err(TaskError::NotFound));
}

#[tokio::test]
async fn test_file_backed_database_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let db_path = dir.path().join("tarefas.db");
    let url = format!("sqlite://{}", db_path.display());

    let repo = SqliteTaskRepository::connect(&url, 5).await.unwrap();
    repo.migrate().await.unwrap();

    let created = repo.create(payload("Buy milk", "2%", "open")).await.unwrap();
    assert_eq!(created.id, 1);
    assert!(db_path.exists());

    let fetched = repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_wildcards_in_term_are_bound_not_spliced() {
    let repo = memory_repo().await;
    repo.create(payload("100% done", "", "")).await.unwrap();

    // A literal % in the term still matches via LIKE wildcards but never
    // reaches the statement text itself.
    let found = repo.search_by_title("100%").await.unwrap();
    assert_eq!(found.len(), 1);

    let found = repo.search_by_title("'; DROP TABLE tasks; --").await.unwrap();
    assert!(found.is_empty());
    // Table is still there
    assert_eq!(repo.list().await.unwrap().len(), 1);
}
