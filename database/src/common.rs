use sqlx::{sqlite::SqliteRow, Row};
use tarefas_core::{
    error::{Result, TaskError},
    models::Task,
};

/// Decode a result row into a task.
///
/// Decode failures belong to the scan phase: the statement already ran, so
/// they surface as server errors rather than request errors.
pub fn row_to_task(row: &SqliteRow) -> Result<Task> {
    Ok(Task {
        id: row.try_get("id").map_err(scan_error)?,
        title: row.try_get("title").map_err(scan_error)?,
        descricao: row.try_get("descricao").map_err(scan_error)?,
        status: row.try_get("status").map_err(scan_error)?,
    })
}

/// Map a driver error into the scan phase with its message preserved.
pub fn scan_error(err: sqlx::Error) -> TaskError {
    TaskError::Scan(err.to_string())
}
