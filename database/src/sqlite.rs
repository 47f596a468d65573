use crate::common::row_to_task;
use async_trait::async_trait;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use tarefas_core::{
    error::{Result, TaskError},
    models::{NewTask, Task},
    repository::TaskRepository,
};

/// SQLite implementation of the `TaskRepository` trait.
///
/// Wraps a connection pool that is created once at process start and
/// shared by all requests; WAL mode keeps concurrent readers and writers
/// out of each other's way for file-backed databases, and the backend's own
/// locking serializes conflicting writes. No statement is retried.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    /// Open a pooled connection to `database_url`.
    ///
    /// Accepts a plain file path, a `sqlite://` URL, or `:memory:`. The
    /// database file is created when missing.
    ///
    /// # Examples
    /// ```rust,no_run
    /// use tarefas_database::SqliteTaskRepository;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let repo = SqliteTaskRepository::connect(":memory:", 1).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let db_url = if database_url.starts_with(":memory:")
            || database_url.starts_with("sqlite://")
        {
            database_url.to_string()
        } else {
            format!("sqlite://{database_url}")
        };

        if !db_url.contains(":memory:") && !Sqlite::database_exists(&db_url).await.unwrap_or(false)
        {
            Sqlite::create_database(&db_url)
                .await
                .map_err(|e| TaskError::Connection(format!("Failed to create database: {e}")))?;
            tracing::info!("Database created at {}", db_url);
        }

        let connect_options = if db_url.contains(":memory:") {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(&db_url)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Memory)
                .busy_timeout(std::time::Duration::from_secs(5))
        } else {
            sqlx::sqlite::SqliteConnectOptions::new()
                .filename(db_url.replace("sqlite://", ""))
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .busy_timeout(std::time::Duration::from_secs(5))
        };

        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options)
            .await
            .map_err(|e| TaskError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Apply the embedded migrations that create the `tasks` table.
    ///
    /// Call once after [`connect`](Self::connect), before serving requests.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(|e| TaskError::Connection(format!("Migration failed: {e}")))?;

        tracing::info!("Database migrations completed");
        Ok(())
    }

    /// Direct pool access for tests that need raw SQL.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn list(&self) -> Result<Vec<Task>> {
        let rows = sqlx::query("SELECT id, title, descricao, status FROM tasks")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TaskError::Query(e.to_string()))?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in &rows {
            tasks.push(row_to_task(row)?);
        }
        Ok(tasks)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Task>> {
        let rows = sqlx::query("SELECT id, title, descricao, status FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TaskError::Query(e.to_string()))?;

        // Absence is signalled by the id staying at its zero value after
        // the rows are consumed. Ids start at 1 in the shipped schema, so
        // zero never names a persisted row.
        let mut task = Task::default();
        for row in &rows {
            task = row_to_task(row)?;
        }

        if !task.is_persisted() {
            return Ok(None);
        }
        Ok(Some(task))
    }

    async fn search_by_title(&self, term: &str) -> Result<Vec<Task>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(TaskError::blank_search_term());
        }

        // The pattern is bound, never interpolated; LIKE compares ASCII
        // case-insensitively in SQLite.
        let pattern = format!("%{term}%");
        let rows = sqlx::query("SELECT id, title, descricao, status FROM tasks WHERE title LIKE ?")
            .bind(&pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TaskError::Query(e.to_string()))?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in &rows {
            tasks.push(row_to_task(row)?);
        }
        Ok(tasks)
    }

    async fn create(&self, task: NewTask) -> Result<Task> {
        if task.title.trim().is_empty() {
            return Err(TaskError::blank_field("title"));
        }

        let row = sqlx::query(
            "INSERT INTO tasks (title, descricao, status) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(&task.title)
        .bind(&task.descricao)
        .bind(&task.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| TaskError::Insert(e.to_string()))?;

        let id: i32 = row
            .try_get("id")
            .map_err(|e| TaskError::Insert(e.to_string()))?;

        Ok(Task {
            id,
            title: task.title,
            descricao: task.descricao,
            status: task.status,
        })
    }

    async fn update(&self, id: i32, task: NewTask) -> Result<()> {
        if task.title.trim().is_empty() {
            return Err(TaskError::blank_field("title"));
        }

        let result =
            sqlx::query("UPDATE tasks SET title = ?, descricao = ?, status = ? WHERE id = ?")
                .bind(&task.title)
                .bind(&task.descricao)
                .bind(&task.status)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| TaskError::Exec(e.to_string()))?;

        // No prior existence query: the affected-row count reported with
        // the statement is authoritative.
        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| TaskError::Delete(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound);
        }
        Ok(())
    }
}
